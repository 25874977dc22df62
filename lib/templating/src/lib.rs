mod filters;

use std::collections::{BTreeMap, HashMap};
use std::error::Error;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use serde_json::{to_value, Value};
use thiserror::Error;
use tracing::debug;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum TemplatingError {
    #[error("json serialize/deserialize error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Creating a Context from a Value/Serialize requires it being a JSON object")]
    TemplateContextError(),

    /// Error that may occur while template operations such as parse and render.
    #[error("Template error: `{0}`")]
    TemplateError(#[from] minijinja::Error),

    /// Error that may occur while parsing the template.
    #[error("Template parse error:\n{0}")]
    TemplateParseError(String),
}

pub type TemplatingResult<T> = Result<T, TemplatingError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateContext {
    pub data: BTreeMap<String, Value>,
}

impl TemplateContext {
    /// Takes a serde-json `Value` and convert it into a `Context` with no overhead/cloning.
    pub fn from_value(obj: Value) -> TemplatingResult<Self> {
        match obj {
            Value::Object(m) => Ok(TemplateContext {
                data: m.into_iter().collect(),
            }),
            _ => Err(TemplatingError::TemplateContextError()),
        }
    }

    /// Takes something that impl Serialize and create a context with it.
    /// Meant to be used if you have a hashmap or a struct and don't want to insert values
    /// one by one in the context.
    pub fn from_serialize(value: impl Serialize) -> TemplatingResult<Self> {
        let obj = to_value(value)?;
        TemplateContext::from_value(obj)
    }
}

#[derive(Debug)]
pub struct Templates<'a> {
    env: Environment<'a>,
}

impl<'a> Templates<'a> {
    /// Builds an environment holding `templates`, keyed by name.
    ///
    /// Output of every template is HTML escaped and the `class_names` filter is
    /// available to all of them.
    pub fn new_with_templates(templates: HashMap<&'a str, String>) -> TemplatingResult<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_filter("class_names", filters::class_names);

        for (k, v) in templates {
            debug!(template = k, "adding template");
            if let Err(e) = env.add_template_owned(k, v) {
                return if let Some(error_source) = e.source() {
                    Err(TemplatingError::TemplateParseError(
                        error_source.to_string(),
                    ))
                } else {
                    Err(TemplatingError::TemplateError(e))
                };
            }
        }

        Ok(Self { env })
    }

    /// Renders the template.
    pub fn render(&self, template: &str, context: TemplateContext) -> TemplatingResult<String> {
        let tmpl = self.env.get_template(template)?;
        let context = &context.data;

        Ok(tmpl.render(context)?)
    }
}
