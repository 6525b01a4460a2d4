mod config_tests;
mod pipeline_tests;

use std::path::Path;

use lfx_pager::config::Config;
use lfx_pager::{PaginationRequest, PaginationView};

/// Write `contents` as a config file in `dir` and load it.
pub fn load_config(dir: &Path, contents: &str) -> Config {
    let path = dir.join("lfx-pager.toml");
    std::fs::write(&path, contents).expect("config file should be writable");
    Config::load(&path).expect("test config should load")
}

/// Compute a view using the configured page-size choices.
pub fn view_with_config(config: &Config, page: i64, page_size: i64, total: i64) -> PaginationView {
    let request = PaginationRequest::new(page, page_size, total)
        .with_page_size_options(config.pagination.page_size_options.clone());
    lfx_pager::compute(&request).expect("request should be valid")
}
