use lfx_pager::PagerError;
use lfx_pager::config::{Config, ConfigError};
use lfx_pager::web::{RenderOptions, Renderer};

use super::*;

/// Settings from a file on disk flow into the computed view and the markup.
#[test]
fn config_file_drives_choices_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(
        dir.path(),
        r#"
[pagination]
page_size = 25
page_size_options = [25, 50, 100]

[render]
page_param = "p"
page_size_param = "per"

[render.labels]
of = "из"
"#,
    );

    let view = view_with_config(&config, 2, config.pagination.page_size, 120);
    assert_eq!(view.total_pages, 5);
    let active: Vec<_> = view
        .page_size_choices
        .iter()
        .filter(|c| c.is_active)
        .map(|c| c.size)
        .collect();
    assert_eq!(active, vec![25]);

    let html = Renderer::new()
        .unwrap()
        .render(&view, &RenderOptions::from(&config.render))
        .unwrap();
    assert!(html.contains("26–50 из 120"));
    assert!(html.contains(r#"href="?p=3""#));
    assert!(html.contains(r#"href="?per=50&amp;p=1""#));
}

/// A file with a bad page size is rejected on load.
#[test]
fn invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[pagination]\npage_size = -10\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err: PagerError = err.into();
    assert!(err.to_string().contains("page_size"));
}

/// Malformed TOML reports the offending path.
#[test]
fn unparsable_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[pagination\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
