use gtmpl::{Context, Template};

use crate::data::to_template_value;
use crate::error::Error;

/// Parses `text` and executes it against `data`. Engine errors are passed
/// through untouched.
pub fn render(text: &str, data: Option<&serde_json::Value>) -> Result<String, Error> {
    let mut tpl = Template::default();
    tpl.parse(text).map_err(|e| Error::Parse(e.to_string()))?;
    let ctx = match data {
        Some(value) => Context::from(to_template_value(value)),
        None => Context::empty(),
    };
    tpl.render(&ctx).map_err(|e| Error::Exec(e.to_string()))
}
