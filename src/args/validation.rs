use serde_json::Value;
use std::{fs, path::Path};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(path: &Path) -> Result<(), String> {
    if !path.is_file() || fs::metadata(path).is_err() {
        return Err(format!("The file '{}' is not readable.", path.display()));
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(path: &Path) -> Result<Value, String> {
    check_readable_file(path)?;
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("The file '{}' is not readable: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("The file '{}' is not valid json: {e}", path.display()))
}

/// Validate the round script shape before deserializing it.
/// format we expect is this:
/// { "courseId": "course1", "date": "2025-04-12" (optional), "totalHoles": 18 (optional),
///   "players": [{ "id", "name", "handicapIndex", "tee" }, ...],
///   "games": [{ "id", "type", "handicapPercentage", "players": [...] }, ...],
///   "holes": [{ "hole": 1 (optional), "scores": { "<player id>": <gross>, ... }, "bbb": {...} (optional) }, ...] }
///
/// # Errors
///
/// Will return `Err` naming the first key that is missing or has the wrong type
pub fn validate_round_script_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The round script is not a json object.".to_string());
    };
    let expected_keys = ["courseId", "date", "totalHoles", "players", "games", "holes"];
    for key in obj.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "Unexpected key '{key}' in round script. Expected keys: {expected_keys:?}"
            ));
        }
    }
    if !obj.get("courseId").is_some_and(Value::is_string) {
        return Err("The json key courseId is missing or not a string.".to_string());
    }
    for key in ["players", "games", "holes"] {
        if !obj.get(key).is_some_and(Value::is_array) {
            return Err(format!("The json key {key} is missing or not an array."));
        }
    }
    let holes = obj.get("holes").and_then(Value::as_array).into_iter().flatten();
    for (i, hole) in holes.enumerate() {
        if !hole.get("scores").is_some_and(Value::is_object) {
            return Err(format!("holes[{i}].scores is missing or not an object."));
        }
    }
    Ok(())
}

/// Validate a course catalogue: a non-empty array of objects with `id`, `name` and `tees`.
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_courses_format(json: &Value) -> Result<(), String> {
    let Some(courses) = json.as_array() else {
        return Err("The course catalogue is not a json array.".to_string());
    };
    if courses.is_empty() {
        return Err("The course catalogue is empty.".to_string());
    }
    for (i, course) in courses.iter().enumerate() {
        for key in ["id", "name"] {
            if !course.get(key).is_some_and(Value::is_string) {
                return Err(format!("courses[{i}].{key} is missing or not a string."));
            }
        }
        if !course.get("tees").is_some_and(Value::is_array) {
            return Err(format!("courses[{i}].tees is missing or not an array."));
        }
    }
    Ok(())
}
