use crate::{Error, Result};

/// Human-readable names for location indices, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels(Vec<String>);

impl Labels {
    /// Parses a comma-separated list. An empty string means no labels.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let names = raw
            .split(',')
            .enumerate()
            .map(|(idx, name)| {
                let name = name.trim();
                if name.is_empty() {
                    Err(Error::invalid_input(format!("Label {}: empty name", idx + 1)))
                } else {
                    Ok(name.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Self(names)))
    }

    pub fn check_len(&self, n: usize) -> Result<()> {
        if self.0.len() != n {
            return Err(Error::invalid_input(format!(
                "expected {n} labels for {n} locations, got {}",
                self.0.len()
            )));
        }
        Ok(())
    }

    pub fn name(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
