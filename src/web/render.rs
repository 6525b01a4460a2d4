use std::sync::OnceLock;

use tera::{Context, Tera};

use crate::config::{Labels, RenderConfig};
use crate::error::PagerError;
use crate::pagination::PaginationView;
use crate::web::context::{query_prefix, register_filters};

pub const TEMPLATE_NAME: &str = "pagination.html";

const PAGINATION_TEMPLATE: &str = r#"<nav class="pagination" aria-label="pagination">
  <span class="pagination-range">{{ pagination.range_start }}–{{ pagination.range_end }} {{ labels.of }} {{ pagination.total_items }}</span>
  {%- if pagination.can_go_previous %}
  <a class="pagination-prev" href="{{ pagination.previous_page | page_href(qs=qs, param=page_param) }}">{{ labels.previous }}</a>
  {%- else %}
  <span class="pagination-prev disabled" aria-disabled="true">{{ labels.previous }}</span>
  {%- endif %}
  {%- for slot in pagination.items %}
  {%- if slot.kind == "ellipsis" %}
  <span class="pagination-ellipsis">…</span>
  {%- elif slot.is_current %}
  <a class="pagination-page active" aria-current="page" href="{{ slot.page_number | page_href(qs=qs, param=page_param) }}">{{ slot.page_number }}</a>
  {%- else %}
  <a class="pagination-page" href="{{ slot.page_number | page_href(qs=qs, param=page_param) }}">{{ slot.page_number }}</a>
  {%- endif %}
  {%- endfor %}
  {%- if pagination.can_go_next %}
  <a class="pagination-next" href="{{ pagination.next_page | page_href(qs=qs, param=page_param) }}">{{ labels.next }}</a>
  {%- else %}
  <span class="pagination-next disabled" aria-disabled="true">{{ labels.next }}</span>
  {%- endif %}
  {%- if pagination.page_size_choices %}
  <span class="pagination-sizes">{{ labels.per_page }}:
    {%- for choice in pagination.page_size_choices %}
    {%- if choice.is_active %}
    <span class="pagination-size active">{{ choice.size }}</span>
    {%- else %}
    <a class="pagination-size" href="{{ choice.size | page_href(qs=qs, param=page_param, size_param=page_size_param) }}">{{ choice.size }}</a>
    {%- endif %}
    {%- endfor %}
  </span>
  {%- endif %}
</nav>
"#;

static SHARED: OnceLock<Result<Renderer, String>> = OnceLock::new();

/// Build the process-wide renderer on first call; later calls return the same
/// instance, or the same error if the first build failed.
pub fn initialize() -> Result<&'static Renderer, PagerError> {
    SHARED
        .get_or_init(|| {
            let built = Renderer::new().map_err(|e| e.to_string());
            if built.is_ok() {
                tracing::info!("Pagination templates loaded");
            }
            built
        })
        .as_ref()
        .map_err(|msg| PagerError::Render(tera::Error::msg(msg.clone())))
}

/// Per-page link and label settings for [`Renderer::render`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepended to every link's query string; ends with `&` when non-empty.
    pub query_prefix: String,
    pub page_param: String,
    pub page_size_param: String,
    pub labels: Labels,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            query_prefix: String::new(),
            page_param: cfg.page_param.clone(),
            page_size_param: cfg.page_size_param.clone(),
            labels: cfg.labels.clone(),
        }
    }
}

impl RenderOptions {
    /// Carry extra query parameters (filters, search terms) through every link.
    /// Pairs named like the page or page-size parameter are dropped, since each
    /// link sets those itself.
    pub fn with_query<K, V>(mut self, pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let kept: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .filter(|(k, _)| *k != self.page_param && *k != self.page_size_param)
            .collect();
        self.query_prefix = query_prefix(&kept);
        self
    }
}

/// Turns a [`PaginationView`] into HTML.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, PagerError> {
        Self::from_template_str(PAGINATION_TEMPLATE)
    }

    /// Use custom markup. The template sees `pagination`, `qs`, `page_param`,
    /// `page_size_param` and `labels`, plus the `page_href` filter.
    pub fn from_template_str(source: &str) -> Result<Self, PagerError> {
        let mut tera = Tera::default();
        register_filters(&mut tera);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render `view`. A hidden view renders as the empty string.
    pub fn render(&self, view: &PaginationView, options: &RenderOptions) -> Result<String, PagerError> {
        if !view.is_visible {
            return Ok(String::new());
        }

        let mut ctx = Context::new();
        ctx.insert("pagination", view);
        ctx.insert("qs", &options.query_prefix);
        ctx.insert("page_param", &options.page_param);
        ctx.insert("page_size_param", &options.page_size_param);
        ctx.insert("labels", &options.labels);

        self.tera.render(TEMPLATE_NAME, &ctx).map_err(|e| {
            tracing::error!("Template render error ({}): {}", TEMPLATE_NAME, e);
            PagerError::Render(e)
        })
    }
}
