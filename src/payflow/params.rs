/// Field names whose values are masked in redacted output
const SENSITIVE_NAMES: [&str; 4] = ["PWD", "ACCT", "EXPDATE", "CVV2"];

const MASK: &str = "****";

/// Ordered list of request fields, encoded for the gateway on demand
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn push_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Returns the value of the first field with the given name
    pub fn get(&self, name: &str) -> Option<&str> {
        return self
            .pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str());
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes the fields in the gateway's name-value-pair format.
    ///
    /// Values are sent raw. A value containing `&`, `=` or `[` gets a length
    /// tag (`PONUM[7]=AB&1234`) so the gateway knows where it ends.
    pub fn to_wire(&self) -> String {
        return self.encode(false);
    }

    /// Same shape as [`ParamList::to_wire`], with sensitive values masked.
    /// Safe for logs and previews.
    pub fn to_wire_redacted(&self) -> String {
        return self.encode(true);
    }

    fn encode(&self, redact: bool) -> String {
        let mut fields = Vec::with_capacity(self.pairs.len());

        for (name, value) in self.pairs.iter() {
            if redact && SENSITIVE_NAMES.contains(&name.as_str()) {
                fields.push(format!("{name}={MASK}"));
            } else if needs_length_tag(value) {
                fields.push(format!("{}[{}]={}", name, value.len(), value));
            } else {
                fields.push(format!("{name}={value}"));
            }
        }

        fields.join("&")
    }
}

/// A raw value containing any of these would be ambiguous to split on the
/// receiving side without a length tag
fn needs_length_tag(value: &str) -> bool {
    return value.contains('&') || value.contains('=') || value.contains('[');
}
