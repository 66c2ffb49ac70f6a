/// Inline style properties, kept in insertion order like a `style` attribute.
///
/// Property names are CSS (kebab-case). Setting an existing property
/// overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(p, _)| p == property)?;
        Some(self.entries.remove(pos).1)
    }

    /// Read a pixel length such as `"20px"` or `"0"`.
    pub fn px(&self, property: &str) -> Option<u16> {
        parse_px(self.get(property)?)
    }

    /// Whether `property` is set to exactly `value`.
    pub fn is(&self, property: &str, value: &str) -> bool {
        self.get(property) == Some(value)
    }

    /// Shallow merge: every property of `other` overwrites ours.
    pub fn extend(&mut self, other: &StyleMap) {
        for (p, v) in other.iter() {
            self.set(p, v);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Parse a CSS pixel length. Unitless numbers are accepted as pixels.
pub fn parse_px(value: &str) -> Option<u16> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let parsed: f32 = number.parse().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed.round().min(u16::MAX as f32) as u16)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("20px"), Some(20));
        assert_eq!(parse_px("0"), Some(0));
        assert_eq!(parse_px(" 12.6px "), Some(13));
        assert_eq!(parse_px("-4px"), None);
        assert_eq!(parse_px("auto"), None);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut style = StyleMap::new().with("display", "block").with("left", "0");
        style.set("display", "inline-block");
        let props: Vec<_> = style.iter().collect();
        assert_eq!(props, vec![("display", "inline-block"), ("left", "0")]);
    }

    #[test]
    fn test_extend_overwrites_and_appends() {
        let mut style = StyleMap::new().with("position", "relative").with("left", "0");
        style.extend(&StyleMap::new().with("left", "6px").with("overflow", "hidden"));
        assert_eq!(style.get("left"), Some("6px"));
        assert_eq!(style.len(), 3);

        assert_eq!(style.remove("position"), Some("relative".to_string()));
        assert_eq!(style.px("left"), Some(6));
        assert!(!style.is("overflow", "auto"));
    }
}
