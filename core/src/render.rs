//! Card markup for a single animal.
//!
//! Field text is HTML-escaped; labels and structure are fixed.

use maud::html;

use animalia_common::animal::record::AnimalRecord;

/// Builds the `<li>` card for one record.
///
/// Detail lines follow a fixed order and any attribute that is empty or
/// missing is left out, so the number of lines varies per record.
pub fn render(record: &AnimalRecord) -> String {
    let locations = record.locations.join(", ");
    let characteristic = |key: &str| record.characteristic(key).unwrap_or_default();

    let fields: [(&str, &str); 8] = [
        ("Diet", characteristic("diet")),
        ("Locations", locations.as_str()),
        ("Type", characteristic("type")),
        ("Skin type", characteristic("skin_type")),
        ("Lifespan", characteristic("lifespan")),
        ("Weight", characteristic("weight")),
        ("Top speed", characteristic("top_speed")),
        ("Temperament", characteristic("temperament")),
    ];

    let mut lines: Vec<String> = vec![
        r#"    <li class="cards__item">"#.to_string(),
        format!(r#"        <div class="card__title">{}</div>"#, escape(&record.name)),
        r#"        <div class="card__text">"#.to_string(),
        r#"            <ul class="card__details">"#.to_string(),
    ];

    lines.extend(fields.iter().filter(|(_, value)| !value.is_empty()).map(|(label, value)| {
        format!(
            r#"            <li class="card__detail"><strong>{label}:</strong> {}</li>"#,
            escape(value)
        )
    }));

    lines.extend([
        "            </ul>".to_string(),
        "        </div>".to_string(),
        "    </li>".to_string(),
    ]);

    lines.join("\n")
}

/// Builds the card shown when a search returned no animals.
pub fn render_error(searched_name: &str) -> String {
    [
        r#"    <li class="cards__item">"#.to_string(),
        format!(
            r#"        <h2 class="card__title">The animal "{}" doesn't exist.</h2>"#,
            escape(searched_name)
        ),
        "    </li>".to_string(),
    ]
    .join("\n")
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}
