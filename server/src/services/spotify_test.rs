use super::*;

fn search_body(items: serde_json::Value) -> String {
    serde_json::json!({ "tracks": { "href": "https://api.spotify.com/v1/search", "items": items } }).to_string()
}

// =========================================================================
// parse_token
// =========================================================================

#[test]
fn token_is_extracted() {
    let body = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#;
    assert_eq!(parse_token(body).as_deref(), Some("abc"));
}

#[test]
fn token_error_body_yields_none() {
    let body = r#"{"error":"invalid_client","error_description":"Invalid client"}"#;
    assert_eq!(parse_token(body), None);
    assert_eq!(parse_token("<html>"), None);
}

// =========================================================================
// parse_track
// =========================================================================

#[test]
fn track_fields_are_mapped() {
    let body = search_body(serde_json::json!([{
        "name": "Bohemian Rhapsody",
        "album": { "name": "A Night at the Opera", "release_date": "1975-11-21", "images": [] },
        "artists": [{ "id": "1dfeR4HaWDbWqFHLkxsg1d", "name": "Queen" }],
        "external_urls": { "spotify": "https://open.spotify.com/track/x" }
    }]));
    let track = parse_track(&body).unwrap().unwrap();
    assert_eq!(track.artist_id, "1dfeR4HaWDbWqFHLkxsg1d");
    assert_eq!(track.details.artist, "Queen");
    assert_eq!(track.details.album, "A Night at the Opera");
    assert_eq!(track.details.release_date, "1975-11-21");
    assert!(track.details.title.is_empty());
    assert!(track.details.genre.is_empty());
}

#[test]
fn missing_release_date_is_blank() {
    let body = search_body(serde_json::json!([{
        "album": { "name": "Album" },
        "artists": [{ "id": "a1", "name": "Artist" }]
    }]));
    let track = parse_track(&body).unwrap().unwrap();
    assert_eq!(track.details.release_date, "");
}

#[test]
fn no_items_yields_none() {
    assert_eq!(parse_track(&search_body(serde_json::json!([]))).unwrap(), None);
    assert_eq!(parse_track("{}").unwrap(), None);
}

#[test]
fn track_without_artists_yields_none() {
    let body = search_body(serde_json::json!([{ "album": { "name": "Album" }, "artists": [] }]));
    assert_eq!(parse_track(&body).unwrap(), None);
}

#[test]
fn malformed_search_is_a_parse_error() {
    assert!(matches!(parse_track("nope"), Err(LyricsError::Parse(_))));
}

// =========================================================================
// parse_genres
// =========================================================================

#[test]
fn genres_are_comma_joined() {
    let body = r#"{"id":"a1","name":"Queen","genres":["classic rock","glam rock","rock"]}"#;
    assert_eq!(parse_genres(body), "classic rock, glam rock, rock");
}

#[test]
fn missing_genres_are_blank() {
    assert_eq!(parse_genres(r#"{"id":"a1"}"#), "");
    assert_eq!(parse_genres("garbage"), "");
}
