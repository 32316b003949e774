//! HTML fragment templates for the dynamic views.
//!
//! Fragments keep the class names the page stylesheet targets
//! (`card`, `tag`, `chip`, `badge`, `star`, `open`, `muted`).

use crate::model::education::EducationEntry;
use crate::model::experience::ExperienceEntry;
use crate::model::favorites::FavoritesSet;
use crate::model::project::Project;
use crate::search::filter::{TagFilter, TAG_WILDCARD};

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn tag_spans(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn external_link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{label}</a>"#,
        escape_html(href)
    )
}

/// Card markup for one project in the grid.
pub fn project_card(project: &Project, starred: bool) -> String {
    let links = [
        project.demo.as_deref().map(|href| external_link(href, "Demo")),
        project.repo.as_deref().map(|href| external_link(href, "Code")),
        project.case_study.as_ref().map(|_| {
            format!(
                r#"<button class="open" data-id="{}">Case study</button>"#,
                escape_html(&project.id)
            )
        }),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    let image = project
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{} thumbnail">"#,
                escape_html(src),
                escape_html(&project.title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card">{image}<div class="row"><h3>{title}</h3><button class="star" aria-label="Toggle favorite" aria-pressed="{starred}" data-id="{id}">★</button></div><p class="muted">{summary}</p><div class="tags">{tags}</div><p>{links}</p></article>"#,
        title = escape_html(&project.title),
        id = escape_html(&project.id),
        summary = escape_html(&project.summary),
        tags = tag_spans(&project.tags),
    )
}

/// Grid markup for an already filtered and ordered project list.
pub fn projects_grid(projects: &[&Project], favorites: &FavoritesSet) -> String {
    projects
        .iter()
        .map(|project| project_card(project, favorites.contains(&project.id)))
        .collect()
}

/// Tag chip buttons: the wildcard first, then `tags` in the given order.
pub fn tag_chips<'a>(tags: impl IntoIterator<Item = &'a String>, selected: &TagFilter) -> String {
    std::iter::once(TAG_WILDCARD)
        .chain(tags.into_iter().map(String::as_str))
        .map(|label| {
            format!(
                r#"<button class="chip" type="button" aria-pressed="{pressed}">{label}</button>"#,
                pressed = label == selected.chip_label(),
                label = escape_html(label),
            )
        })
        .collect()
}

/// Case-study modal body for one project.
pub fn project_modal(project: &Project) -> String {
    let body = project
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(&project.summary);
    let gallery: String = project
        .gallery
        .iter()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{} image">"#,
                escape_html(src),
                escape_html(&project.title)
            )
        })
        .collect();
    let links = [
        project
            .repo
            .as_deref()
            .map(|href| external_link(href, "Repository")),
        project
            .demo
            .as_deref()
            .map(|href| external_link(href, "Live Demo")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    format!(
        r#"<header class="row"><h3>{title}</h3><button class="close" data-close>Close</button></header><p>{body}</p>{gallery}<p>{links}</p>"#,
        title = escape_html(&project.title),
        body = escape_html(body),
    )
}

/// Timeline item for one role.
pub fn experience_item(entry: &ExperienceEntry) -> String {
    format!(
        r#"<li><div class="card"><div class="row"><strong>{title}</strong><span class="badge">{start} – {end}</span></div><div class="muted">{company} · {location}</div><details class="accord"><summary>Highlights</summary><ul class="list">{highlights}</ul></details><div class="tags">{tags}</div></div></li>"#,
        title = escape_html(&entry.title),
        start = escape_html(&entry.start),
        end = escape_html(entry.end_label()),
        company = escape_html(&entry.company),
        location = escape_html(&entry.location),
        highlights = list_items(&entry.highlights),
        tags = tag_spans(&entry.tags),
    )
}

pub fn experience_timeline(entries: &[&ExperienceEntry]) -> String {
    entries.iter().map(|entry| experience_item(entry)).collect()
}

/// Card for one school.
pub fn education_card(entry: &EducationEntry) -> String {
    format!(
        r#"<article class="card"><div class="row"><h3>{school}</h3><span class="badge">{start} – {end}</span></div><div class="muted">{degree} · {location}</div><p>{summary}</p><div class="tags">{highlights}</div></article>"#,
        school = escape_html(&entry.school),
        start = escape_html(&entry.start),
        end = escape_html(entry.end_label()),
        degree = escape_html(&entry.degree),
        location = escape_html(&entry.location),
        summary = escape_html(entry.summary.as_deref().unwrap_or_default()),
        highlights = tag_spans(&entry.highlights),
    )
}

pub fn education_cards(entries: &[EducationEntry]) -> String {
    entries.iter().map(education_card).collect()
}

/// Coursework of the most recent (first) school.
pub fn coursework_list(entries: &[EducationEntry]) -> String {
    entries
        .first()
        .map(|entry| list_items(&entry.coursework))
        .unwrap_or_default()
}

/// Printable resume: all roles, all schools, then the first `project_limit`
/// projects in source order.
pub fn resume(
    experience: &[ExperienceEntry],
    education: &[EducationEntry],
    projects: &[Project],
    project_limit: usize,
) -> String {
    let roles: String = experience
        .iter()
        .map(|entry| {
            format!(
                r#"<div><strong>{}</strong> — {} <span class="muted">({}–{})</span><ul>{}</ul></div>"#,
                escape_html(&entry.title),
                escape_html(&entry.company),
                escape_html(&entry.start),
                escape_html(entry.end_label()),
                list_items(&entry.highlights),
            )
        })
        .collect();
    let schools: String = education
        .iter()
        .map(|entry| {
            format!(
                "<div><strong>{}</strong> — {} ({}–{})</div>",
                escape_html(&entry.school),
                escape_html(&entry.degree),
                escape_html(&entry.start),
                escape_html(entry.end_label()),
            )
        })
        .collect();
    let highlights: String = projects
        .iter()
        .take(project_limit)
        .map(|project| {
            format!(
                "<div><strong>{}</strong>: {}</div>",
                escape_html(&project.title),
                escape_html(&project.summary),
            )
        })
        .collect();

    format!("<h3>Experience</h3>{roles}<h3>Education</h3>{schools}<h3>Projects</h3>{highlights}")
}
