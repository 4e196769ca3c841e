//! Common test utilities

use serde_json::{json, Value};

/// German page for Albert Einstein as returned by the query API
pub fn einstein_de() -> Value {
    json!({
        "pageid": 1278360,
        "ns": 0,
        "title": "Albert Einstein",
        "extract": "Albert Einstein war ein schweizerisch-US-amerikanischer theoretischer Physiker deutscher Herkunft.",
        "fullurl": "https://de.wikipedia.org/wiki/Albert_Einstein",
        "pageprops": {"wikibase_item": "Q937", "infoboxes": ["Personendaten"]},
        "categories": [
            {"ns": 14, "title": "Kategorie:Physiker (20. Jahrhundert)"},
            {"ns": 14, "title": "Kategorie:Nobelpreisträger für Physik"}
        ],
        "links": [
            {"ns": 0, "title": "Relativitätstheorie"},
            {"ns": 0, "title": "Ulm"}
        ],
        "thumbnail": {
            "source": "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3e/Einstein_1921.jpg/200px-Einstein_1921.jpg",
            "width": 200,
            "height": 261
        },
        "langlinks": [
            {"lang": "en", "title": "Albert Einstein"},
            {"lang": "fr", "title": "Albert Einstein"}
        ]
    })
}

/// English page for Albert Einstein
pub fn einstein_en() -> Value {
    json!({
        "pageid": 736,
        "ns": 0,
        "title": "Albert Einstein",
        "extract": "Albert Einstein was a German-born theoretical physicist.",
        "pageprops": {"wikibase_item": "Q937"},
        "categories": [
            {"ns": 14, "title": "Category:20th-century physicists"}
        ],
        "links": [{"ns": 0, "title": "Theory of relativity"}],
        "langlinks": [{"lang": "de", "title": "Albert Einstein"}]
    })
}

/// German page wrapped in a `formatversion=1` query envelope
#[allow(dead_code)]
pub fn zugspitze_de_envelope() -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "60133": {
                    "pageid": 60133,
                    "ns": 0,
                    "title": "Zugspitze",
                    "extract": "Die Zugspitze ist mit 2962 m ü. NHN der höchste Gipfel des Wettersteingebirges.",
                    "coordinates": [{"lat": 47.421111, "lon": 10.985278, "primary": "", "globe": "earth"}],
                    "langlinks": [{"lang": "en", "*": "Zugspitze"}]
                }
            }
        }
    })
}

/// Envelope for a title that does not exist
#[allow(dead_code)]
pub fn missing_envelope(title: &str) -> Value {
    json!({
        "query": {
            "pages": {
                "-1": {"ns": 0, "title": title, "missing": ""}
            }
        }
    })
}
