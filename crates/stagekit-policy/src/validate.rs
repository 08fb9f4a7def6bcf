//! Chord sheet validation

use serde_json::Value;

use stagekit_types::Error;

/// Section tags a chord sheet may use
const VALID_TAGS: [&str; 19] = [
    "Arrangement",
    "Verse",
    "Verse 1",
    "Verse 2",
    "Verse 3",
    "Verse 4",
    "Verse 5",
    "Chorus",
    "Chorus 1",
    "Chorus 2",
    "Chorus 3",
    "Chorus 4",
    "Chorus 5",
    "Pre-Chorus",
    "Bridge",
    "Tag",
    "Intro",
    "Outro",
    "Intermezzo",
];

/// Check that a chord sheet is an object mapping recognized section tags
/// to their chord lines.
pub fn validate_chord_sheet(chord_sheet: &Value) -> Result<(), Error> {
    let Some(sections) = chord_sheet.as_object() else {
        return Err(Error::bad_request("could not parse chord sheet"));
    };

    for (tag, content) in sections {
        if !VALID_TAGS.contains(&tag.as_str()) {
            return Err(Error::bad_request(format!("{tag} is not a valid tag")));
        }
        if !content.is_string() {
            return Err(Error::bad_request(format!("section {tag} must be a string")));
        }
    }

    Ok(())
}
