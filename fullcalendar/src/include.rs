use crate::{Error, Result};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tera::{Function, Value};

/// the name `IncludeHandlebarsTemplate` is registered under in tera
pub const INCLUDE_HANDLEBARS_TEMPLATE: &str = "include_handlebars_template";

const PATH_ARG: &str = "path";

/**
Reads a handlebars template from `templates_dir` and returns its
contents verbatim.

Handlebars templates are consumed client-side by the calendar web
component, so they are never parsed or escaped here. The path is
joined onto `templates_dir` as given and is not checked for `..`
segments.

# Errors

Returns [`Error::TemplateNotFound`] if there is no file at the
resolved path, and [`Error::Io`] if it exists but cannot be read as
utf-8 text.
*/
pub fn read_handlebars_template(templates_dir: &Path, path: &str) -> Result<String> {
    let filepath = templates_dir.join(path);
    if !filepath.is_file() {
        return Err(Error::TemplateNotFound(filepath));
    }

    let contents = fs::read_to_string(&filepath)?;
    log::debug!("included handlebars template {:?}", &filepath);
    Ok(contents)
}

/**
tera function that inlines a raw handlebars template into the page.

Called as `{{ include_handlebars_template(path="event-tooltip.hbs") }}`.
The output is marked safe, so autoescaping templates embed it as-is.

```
# fn main() -> Result<(), Box<dyn std::error::Error>> {
use trillium_fullcalendar::{IncludeHandlebarsTemplate, INCLUDE_HANDLEBARS_TEMPLATE};

let dir = tempfile::tempdir()?;
std::fs::write(dir.path().join("widget.html"), "<div>{{title}}</div>")?;

let mut tera = tera::Tera::default();
tera.register_function(INCLUDE_HANDLEBARS_TEMPLATE, IncludeHandlebarsTemplate::new(dir.path()));
tera.add_raw_template("page.html", r#"{{ include_handlebars_template(path="widget.html") }}"#)?;
assert_eq!(tera.render("page.html", &tera::Context::new())?, "<div>{{title}}</div>");
# Ok(()) }
```
*/
#[derive(Clone, Debug)]
pub struct IncludeHandlebarsTemplate {
    templates_dir: PathBuf,
}

impl IncludeHandlebarsTemplate {
    /// builds a new IncludeHandlebarsTemplate that resolves paths
    /// relative to `templates_dir`
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// the directory that paths are resolved against
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    fn include(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let path = match args.get(PATH_ARG) {
            Some(Value::String(path)) => path,
            Some(other) => {
                return Err(Error::InvalidArgument {
                    name: PATH_ARG,
                    value: other.to_string(),
                })
            }
            None => return Err(Error::MissingArgument(PATH_ARG)),
        };

        read_handlebars_template(&self.templates_dir, path).map(Value::String)
    }
}

impl Function for IncludeHandlebarsTemplate {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.include(args)
            .map_err(|e| e.into_tera(INCLUDE_HANDLEBARS_TEMPLATE))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
