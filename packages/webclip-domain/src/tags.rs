/// Tags are stored as one comma-joined string; an empty sequence is stored as
/// an absent column so filters can treat "no tags" and "no row" alike.
pub fn join(tags: &[String]) -> Option<String> {
	if tags.is_empty() {
		return None;
	}

	Some(tags.join(","))
}

pub fn split(joined: Option<&str>) -> Vec<String> {
	match joined {
		Some(raw) if !raw.is_empty() => raw.split(',').map(ToString::to_string).collect(),
		_ => Vec::new(),
	}
}

/// Collapses an empty optional text payload into an absent value. The wire
/// form does not distinguish `""` from missing; storage must.
pub fn optional(text: String) -> Option<String> {
	if text.is_empty() { None } else { Some(text) }
}
