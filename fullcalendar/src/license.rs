use std::collections::HashMap;
use tera::{Function, Value};

/// the name `FcLicense` is registered under in tera
pub const GET_FC_LICENSE: &str = "get_fc_license";

/**
tera function that exposes the configured fullcalendar license key.

Renders the key when one is configured and `null` (an empty string in
output) otherwise. Takes no arguments; any that are passed are
ignored. The key is not marked safe, so it is escaped like any other
value.

```
# fn main() -> tera::Result<()> {
use trillium_fullcalendar::{FcLicense, GET_FC_LICENSE};

let mut tera = tera::Tera::default();
tera.register_function(GET_FC_LICENSE, FcLicense::from(Some("ABC-123")));
tera.add_raw_template("key.html", "{{ get_fc_license() }}")?;
assert_eq!(tera.render("key.html", &tera::Context::new())?, "ABC-123");
# Ok(()) }
```
*/
#[derive(Clone, Debug, Default)]
pub struct FcLicense(Option<String>);

impl FcLicense {
    /// builds a new FcLicense from an optional key
    pub fn new(license_key: Option<String>) -> Self {
        Self(license_key)
    }

    /// the license key, if any
    pub fn license_key(&self) -> Option<&str> {
        self.0.as_deref()
    }

    fn resolve(&self) -> Value {
        match &self.0 {
            Some(key) => Value::String(key.clone()),
            None => Value::Null,
        }
    }
}

impl From<Option<&str>> for FcLicense {
    fn from(license_key: Option<&str>) -> Self {
        Self::new(license_key.map(String::from))
    }
}

impl Function for FcLicense {
    fn call(&self, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        Ok(self.resolve())
    }
}
