use std::fmt::{self, Write};

use grantdb_core::{catalog::Origin, entities::*, tag::TagPreview, view::CatalogView};

pub fn summary(view: &CatalogView, origin: &Origin) -> String {
    let mut line = format!(
        "Showing {} of {} grants",
        view.visible.len(),
        view.total_count
    );
    match view.selected_tag_count {
        0 => {}
        1 => line.push_str(" (filtered by 1 tag)"),
        n => {
            let _ = write!(line, " (filtered by {n} tags)");
        }
    }
    if let Origin::TagSearch(tags) = origin {
        let _ = write!(line, " from a server search for {}", tags.join(", "));
    }
    line
}

fn write_ranked_tags(out: &mut String, view: &CatalogView, filter: &FilterState) -> fmt::Result {
    if view.ranked_tags.shown.is_empty() {
        return Ok(());
    }
    writeln!(out, "Filter by tags:")?;
    for frequency in &view.ranked_tags.shown {
        let marker = if filter.is_selected(frequency.tag()) {
            '*'
        } else {
            ' '
        };
        writeln!(out, " {marker} {} ({})", frequency.tag(), frequency.count())?;
    }
    if view.ranked_tags.remaining_count > 0 {
        writeln!(
            out,
            "   +{} more tags available",
            view.ranked_tags.remaining_count
        )?;
    }
    Ok(())
}

fn write_urls(out: &mut String, label: &str, urls: Option<&Vec<String>>) -> fmt::Result {
    match urls {
        Some(urls) if !urls.is_empty() => writeln!(out, "    {label}: {}", urls.join(", ")),
        _ => Ok(()),
    }
}

pub fn write_grant(out: &mut String, grant: &Grant) -> fmt::Result {
    match grant.id {
        Some(id) => writeln!(out, "[{id}] {}", grant.name)?,
        None => writeln!(out, "{}", grant.name)?,
    }
    if !grant.description.is_empty() {
        writeln!(out, "    {}", grant.description)?;
    }
    if grant.tags.is_empty() {
        writeln!(out, "    Tags: -")?;
    } else {
        writeln!(out, "    Tags: {}", grant.tags.join(", "))?;
    }
    write_urls(out, "Websites", grant.website_urls.as_ref())?;
    write_urls(out, "Documents", grant.document_urls.as_ref())
}

/// Render the complete catalog view.
pub fn catalog_view(view: &CatalogView, filter: &FilterState, origin: &Origin) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    let _ = write_catalog_view(&mut out, view, filter, origin);
    out
}

fn write_catalog_view(
    out: &mut String,
    view: &CatalogView,
    filter: &FilterState,
    origin: &Origin,
) -> fmt::Result {
    write_ranked_tags(out, view, filter)?;
    if let Some(term) = filter.trimmed_search_term() {
        writeln!(out, "Search: \"{term}\"")?;
    }
    writeln!(out, "Sort: {}", filter.sort_key)?;
    writeln!(out, "{}", summary(view, origin))?;
    writeln!(out)?;
    if view.visible.is_empty() {
        if filter.has_filters() {
            writeln!(out, "No grants found. Try adjusting your search or filters.")?;
        } else {
            writeln!(out, "No grants found.")?;
        }
        return Ok(());
    }
    for grant in &view.visible {
        write_grant(out, grant)?;
    }
    Ok(())
}

pub fn tag_preview(preview: &TagPreview) -> String {
    if preview.shown.is_empty() {
        return "No tags available".to_string();
    }
    let mut line = format!("Available tags: {}", preview.shown.join(", "));
    if preview.remaining_count > 0 {
        let _ = write!(line, " ... and {} more", preview.remaining_count);
    }
    line
}
