//! Shared fixtures for the TCGdex SDK integration tests.
//!
//! Provides sample payloads shaped like the live API and `spawn_mock()`, which
//! serves them from a local axum server on an ephemeral port.

#![allow(dead_code)]

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Card payloads
// ---------------------------------------------------------------------------

fn set_brief_sv05() -> Value {
    json!({
        "id": "sv05",
        "name": "Temporal Forces",
        "logo": "https://assets.tcgdex.net/en/sv/sv05/logo",
        "symbol": "https://assets.tcgdex.net/univ/sv/sv05/symbol",
        "cardCount": { "total": 218, "official": 162 }
    })
}

pub fn pokemon_card() -> Value {
    json!({
        "category": "Pokemon",
        "id": "sv05-019",
        "localId": "019",
        "name": "Scovillain",
        "image": "https://assets.tcgdex.net/en/sv/sv05/019",
        "illustrator": "Kariya",
        "rarity": "Uncommon",
        "set": set_brief_sv05(),
        "variants": { "normal": true, "reverse": true, "holo": false, "firstEdition": false },
        "boosters": [
            {
                "id": "boo_sv05-iron-leaves",
                "name": "Iron Leaves",
                "logo": "https://assets.tcgdex.net/en/sv/sv05/boosters/iron-leaves/logo",
                "artwork_front": "https://assets.tcgdex.net/en/sv/sv05/boosters/iron-leaves/front",
                "artwork_back": "https://assets.tcgdex.net/en/sv/sv05/boosters/iron-leaves/back"
            }
        ],
        "pricing": {
            "cardmarket": {
                "updated": "2025-08-05T00:42:15.000Z",
                "unit": "EUR",
                "idProduct": 760362,
                "avg": 0.08,
                "low": 0.02,
                "trend": 0.08,
                "avg1": 0.05,
                "avg7": 0.08,
                "avg30": 0.08,
                "avg-holo": 0.27,
                "low-holo": 0.03,
                "trend-holo": 0.22,
                "avg1-holo": 0.2,
                "avg7-holo": 0.25,
                "avg30-holo": 0.26
            },
            "tcgplayer": {
                "updated": "2025-08-05T20:07:54.000Z",
                "unit": "USD",
                "normal": {
                    "lowPrice": 0.02,
                    "midPrice": 0.12,
                    "highPrice": 2.0,
                    "marketPrice": 0.09,
                    "directLowPrice": 0.05
                },
                "reverse-holofoil": {
                    "lowPrice": 0.1,
                    "midPrice": 0.25,
                    "highPrice": 3.0,
                    "marketPrice": 0.2,
                    "directLowPrice": null
                }
            }
        },
        "updated": "2025-08-05T20:07:54+02:00",
        "legal": { "standard": true, "expanded": true },
        "dexId": [952],
        "hp": 110,
        "types": ["Fire"],
        "evolveFrom": "Capsakid",
        "description": "The red head converts spicy chemicals into fire energy.",
        "stage": "Stage1",
        "attacks": [
            { "cost": ["Fire"], "name": "Spicy Pinch", "damage": 50 },
            {
                "cost": ["Fire", "Colorless"],
                "name": "Super Hot",
                "effect": "Flip a coin. If heads, this attack does 40 more damage.",
                "damage": "90+"
            }
        ],
        "weaknesses": [{ "type": "Water", "value": "×2" }],
        "retreat": 2,
        "regulationMark": "H"
    })
}

pub fn trainer_card() -> Value {
    json!({
        "category": "Trainer",
        "id": "bog-3",
        "localId": "3",
        "name": "Professor Elm's Lecture",
        "image": "https://assets.tcgdex.net/en/misc/bog/3",
        "illustrator": "Ken Sugimori",
        "rarity": "None",
        "set": {
            "id": "bog",
            "name": "Best of game",
            "cardCount": { "total": 9, "official": 9 }
        },
        "variants": { "normal": false, "reverse": false, "holo": true, "firstEdition": false },
        "updated": "2024-06-18T00:34:39+02:00",
        "legal": { "standard": false, "expanded": false },
        "effect": "Search your deck for up to 3 Baby Pokémon and put them into your hand.",
        "trainerType": "Supporter"
    })
}

pub fn energy_card() -> Value {
    json!({
        "category": "Energy",
        "id": "col1-90",
        "localId": "90",
        "name": "Double Colorless Energy",
        "illustrator": "5ban Graphics",
        "rarity": "Uncommon",
        "set": {
            "id": "col1",
            "name": "Call of Legends",
            "logo": "https://assets.tcgdex.net/en/hgss/col1/logo",
            "cardCount": { "total": 106, "official": 95 }
        },
        "variants": { "normal": true, "reverse": true, "holo": false, "firstEdition": false },
        "pricing": { "cardmarket": null, "tcgplayer": null },
        "updated": "2024-06-18T00:34:39+02:00",
        "legal": { "standard": false, "expanded": false },
        "effect": "Double Colorless Energy provides Colorless Colorless Energy.",
        "energyType": "Special"
    })
}

pub fn japanese_pokemon_card() -> Value {
    json!({
        "category": "Pokemon",
        "id": "VS1-004",
        "localId": "004",
        "name": "ヤミカラス",
        "image": "https://assets.tcgdex.net/ja/VS/VS1/004",
        "illustrator": "Ken Sugimori",
        "set": {
            "id": "VS1",
            "name": "ポケモンカード★VS",
            "cardCount": { "total": 141, "official": 141 }
        },
        "variants": { "normal": true, "reverse": false, "holo": false, "firstEdition": true },
        "updated": "2024-06-18T00:34:39+02:00",
        "legal": { "standard": false, "expanded": false },
        "dexId": [198],
        "hp": 50,
        "types": ["Darkness"],
        "stage": "Basic"
    })
}

/// Same card as [`pokemon_card`] with one field replaced.
pub fn pokemon_card_with(key: &str, value: Value) -> Value {
    let mut card = pokemon_card();
    card[key] = value;
    card
}

/// Same card as [`pokemon_card`] without the given field.
pub fn pokemon_card_without(key: &str) -> Value {
    let mut card = pokemon_card();
    card.as_object_mut().map(|o| o.remove(key));
    card
}

pub fn card_list() -> Value {
    json!([
        { "id": "sv05-019", "localId": "019", "name": "Scovillain", "image": "https://assets.tcgdex.net/en/sv/sv05/019" },
        { "id": "bog-3", "localId": "3", "name": "Professor Elm's Lecture", "image": "https://assets.tcgdex.net/en/misc/bog/3" },
        { "id": "col1-90", "localId": "90", "name": "Double Colorless Energy" }
    ])
}

// ---------------------------------------------------------------------------
// Set and serie payloads
// ---------------------------------------------------------------------------

pub fn set_swsh3() -> Value {
    json!({
        "id": "swsh3",
        "name": "Darkness Ablaze",
        "logo": "https://assets.tcgdex.net/en/swsh/swsh3/logo",
        "symbol": "https://assets.tcgdex.net/univ/swsh/swsh3/symbol",
        "releaseDate": "2020-08-14",
        "cardCount": {
            "total": 201,
            "official": 189,
            "normal": 120,
            "reverse": 162,
            "holo": 58,
            "firstEd": 0
        },
        "cards": [
            { "id": "swsh3-1", "localId": "1", "name": "Butterfree V", "image": "https://assets.tcgdex.net/en/swsh/swsh3/1" },
            { "id": "swsh3-2", "localId": "2", "name": "Butterfree VMAX", "image": "https://assets.tcgdex.net/en/swsh/swsh3/2" },
            { "id": "swsh3-136", "localId": "136", "name": "Furret" }
        ],
        "legal": { "standard": false, "expanded": true },
        "serie": {
            "id": "swsh",
            "name": "Sword & Shield",
            "logo": "https://assets.tcgdex.net/en/swsh/logo"
        }
    })
}

pub fn set_list() -> Value {
    json!([
        {
            "id": "swsh3",
            "name": "Darkness Ablaze",
            "logo": "https://assets.tcgdex.net/en/swsh/swsh3/logo",
            "symbol": "https://assets.tcgdex.net/univ/swsh/swsh3/symbol",
            "cardCount": { "total": 201, "official": 189 }
        },
        {
            "id": "bog",
            "name": "Best of game",
            "cardCount": { "total": 9, "official": 9 }
        }
    ])
}

pub fn serie_swsh() -> Value {
    json!({
        "id": "swsh",
        "name": "Sword & Shield",
        "logo": "https://assets.tcgdex.net/en/swsh/logo",
        "sets": [
            {
                "id": "swsh1",
                "name": "Sword & Shield",
                "logo": "https://assets.tcgdex.net/en/swsh/swsh1/logo",
                "cardCount": { "total": 216, "official": 202 }
            },
            {
                "id": "swsh2",
                "name": "Rebel Clash",
                "cardCount": { "total": 209, "official": 192 }
            },
            {
                "id": "swsh3",
                "name": "Darkness Ablaze",
                "symbol": "https://assets.tcgdex.net/univ/swsh/swsh3/symbol",
                "cardCount": { "total": 201, "official": 189 }
            }
        ]
    })
}

pub fn serie_list() -> Value {
    json!([
        { "id": "base", "name": "Base", "logo": "https://assets.tcgdex.net/en/base/logo" },
        { "id": "swsh", "name": "Sword & Shield", "logo": "https://assets.tcgdex.net/en/swsh/logo" },
        { "id": "misc", "name": "Miscellaneous" }
    ])
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

// ---------------------------------------------------------------------------
// Mock upstream
// ---------------------------------------------------------------------------

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn ok(value: Value) -> Response {
    json_response(StatusCode::OK, value.to_string())
}

fn not_found(path: &str) -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        json!({
            "type": "https://tcgdex.dev/errors/not-found",
            "title": "The resource you are trying to reach does not exists",
            "status": 404,
            "endpoint": path,
            "method": "GET"
        })
        .to_string(),
    )
}

/// Ids with scripted misbehaviour, shared by every single-resource route.
fn scripted(id: &str) -> Option<Response> {
    match id {
        "server-error" => Some(json_response(StatusCode::INTERNAL_SERVER_ERROR, "{}".into())),
        "empty-body" => Some(json_response(StatusCode::OK, String::new())),
        "null-body" => Some(json_response(StatusCode::OK, "null".into())),
        "garbage" => Some(json_response(StatusCode::OK, "<html>not json</html>".into())),
        _ => None,
    }
}

async fn list_cards(Path(lang): Path<String>) -> Response {
    match lang.as_str() {
        "en" | "ja" => ok(card_list()),
        _ => not_found("/cards"),
    }
}

async fn get_card(Path((lang, id)): Path<(String, String)>) -> Response {
    if let Some(resp) = scripted(&id) {
        return resp;
    }
    let card = match (lang.as_str(), id.as_str()) {
        ("en", "sv05-019") => pokemon_card(),
        ("en", "bog-3") => trainer_card(),
        ("en", "col1-90") => energy_card(),
        ("ja", "VS1-004") => japanese_pokemon_card(),
        ("en", "unknown-category") => pokemon_card_with("category", json!("Item")),
        ("en", "bad-timestamp") => pokemon_card_with("updated", json!("05/08/2025 20:07")),
        ("en", "a/b") => trainer_card(),
        _ => return not_found(&format!("/cards/{id}")),
    };
    ok(card)
}

async fn list_sets() -> Response {
    ok(set_list())
}

async fn get_set(Path((_lang, id)): Path<(String, String)>) -> Response {
    if let Some(resp) = scripted(&id) {
        return resp;
    }
    match id.as_str() {
        "swsh3" => ok(set_swsh3()),
        _ => not_found(&format!("/sets/{id}")),
    }
}

async fn list_series() -> Response {
    ok(serie_list())
}

async fn get_serie(Path((_lang, id)): Path<(String, String)>) -> Response {
    if let Some(resp) = scripted(&id) {
        return resp;
    }
    match id.as_str() {
        "swsh" => ok(serie_swsh()),
        _ => not_found(&format!("/series/{id}")),
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/v2/{lang}/cards", get(list_cards))
        .route("/v2/{lang}/cards/{id}", get(get_card))
        .route("/v2/{lang}/sets", get(list_sets))
        .route("/v2/{lang}/sets/{id}", get(get_set))
        .route("/v2/{lang}/series", get(list_series))
        .route("/v2/{lang}/series/{id}", get(get_serie))
}

/// Start the mock on the current Tokio runtime and return its API root
/// (the value to pass to `TcgDex::builder().base_url(..)`).
pub async fn spawn_mock() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}/v2")
}

/// Start the mock on its own thread and runtime, for blocking-client tests.
pub fn spawn_mock_on_thread() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    format!("http://{addr}/v2")
}

/// Install a test logger so `RUST_LOG=debug` shows request traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
