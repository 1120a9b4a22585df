use serde_json::Value;

use crate::models::search::{CatalogArtist, CatalogResult};

/// Browse page types that identify an artist link inside a subtitle.
const ARTIST_PAGE_TYPES: &[&str] = &["MUSIC_PAGE_TYPE_ARTIST", "MUSIC_PAGE_TYPE_USER_CHANNEL"];

/// Leading subtitle labels that name the kind of result rather than an artist.
const RESULT_TYPES: &[&str] = &[
    "song",
    "video",
    "album",
    "artist",
    "playlist",
    "single",
    "ep",
    "episode",
    "podcast",
    "profile",
    "station",
    "community playlist",
    "featured playlist",
];

const PLAY_BUTTON_VIDEO_ID: &str = "/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId";

/// Flattens a catalog search response into result records, keeping the
/// catalog's order: the top-result card first, then each shelf in turn.
pub fn parse_search_results(response: &Value) -> Vec<CatalogResult> {
    let Some(sections) = section_list(response) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for section in sections {
        if let Some(card) = section.get("musicCardShelfRenderer") {
            results.extend(parse_top_result(card));
        } else if let Some(items) = section
            .pointer("/musicShelfRenderer/contents")
            .and_then(Value::as_array)
        {
            results.extend(
                items
                    .iter()
                    .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
                    .map(parse_list_item),
            );
        }
    }
    results
}

fn section_list(response: &Value) -> Option<&Vec<Value>> {
    if let Some(tabs) = response
        .pointer("/contents/tabbedSearchResultsRenderer/tabs")
        .and_then(Value::as_array)
    {
        // Filtered searches come back with the matching tab selected
        let tab = tabs
            .iter()
            .find(|tab| tab.pointer("/tabRenderer/selected") == Some(&Value::Bool(true)))
            .or_else(|| tabs.first())?;
        return tab
            .pointer("/tabRenderer/content/sectionListRenderer/contents")
            .and_then(Value::as_array);
    }
    response
        .pointer("/contents/sectionListRenderer/contents")
        .and_then(Value::as_array)
}

fn parse_top_result(card: &Value) -> Option<CatalogResult> {
    let title_run = card.pointer("/title/runs/0")?;
    let video_id = title_run
        .pointer("/navigationEndpoint/watchEndpoint/videoId")
        .or_else(|| card.pointer(&format!("/thumbnailOverlay{}", PLAY_BUTTON_VIDEO_ID)))
        .and_then(Value::as_str)
        .map(str::to_string);
    let subtitle = runs(card.get("subtitle"));

    Some(build_result(run_text(title_run), video_id, subtitle))
}

fn parse_list_item(item: &Value) -> CatalogResult {
    let title = item
        .pointer("/flexColumns/0/musicResponsiveListItemFlexColumnRenderer/text/runs/0")
        .and_then(run_text);
    let video_id = item
        .pointer("/playlistItemData/videoId")
        .or_else(|| item.pointer(&format!("/overlay{}", PLAY_BUTTON_VIDEO_ID)))
        .and_then(Value::as_str)
        .map(str::to_string);
    let subtitle = runs(item.pointer("/flexColumns/1/musicResponsiveListItemFlexColumnRenderer/text"));

    build_result(title, video_id, subtitle)
}

fn build_result(title: Option<String>, video_id: Option<String>, subtitle: &[Value]) -> CatalogResult {
    let result_type = subtitle
        .first()
        .and_then(run_text)
        .filter(|text| subtitle.len() > 1 && RESULT_TYPES.contains(&text.to_lowercase().as_str()))
        .map(|text| text.to_lowercase());
    let artists = parse_artists(subtitle, result_type.as_deref());

    CatalogResult {
        result_type,
        video_id,
        title,
        artists,
    }
}

/// Linked artist runs win. Without links, the first plain run after the type
/// label is taken, except on artist cards where the subtitle is a subscriber
/// count.
fn parse_artists(subtitle: &[Value], result_type: Option<&str>) -> Vec<CatalogArtist> {
    let linked: Vec<CatalogArtist> = subtitle
        .iter()
        .filter(|run| {
            run.pointer("/navigationEndpoint/browseEndpoint/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType")
                .and_then(Value::as_str)
                .is_some_and(|page| ARTIST_PAGE_TYPES.contains(&page))
        })
        .filter_map(|run| {
            Some(CatalogArtist {
                name: run_text(run)?,
                id: run
                    .pointer("/navigationEndpoint/browseEndpoint/browseId")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        })
        .collect();
    if !linked.is_empty() || result_type == Some("artist") {
        return linked;
    }

    let skip = usize::from(result_type.is_some());
    subtitle
        .iter()
        .skip(skip)
        .filter_map(run_text)
        .find(|text| !is_separator(text))
        .map(|name| CatalogArtist { name, id: None })
        .into_iter()
        .collect()
}

fn runs(container: Option<&Value>) -> &[Value] {
    container
        .and_then(|c| c.get("runs"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn run_text(run: &Value) -> Option<String> {
    run.get("text").and_then(Value::as_str).map(str::to_string)
}

fn is_separator(text: &str) -> bool {
    matches!(text.trim(), "" | "•" | "&" | ",")
}
