//! String rendering of the page and the navigation bar.
//!
//! The renderer is a pure function of the static content tables and the
//! active section: it holds no state of its own. Markup is built by plain
//! string pushing; there is no templating layer at this scale.

use crate::content::{CONTACT_BLURB, PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::section::SectionId;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the sticky navigation bar.
///
/// One button per section in declared order; the button whose section equals
/// `active` carries the `active` class and `aria-current="page"`.
pub fn render_nav(active: SectionId) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"nav\" role=\"navigation\" aria-label=\"Main navigation\">\n");
    out.push_str("  <div class=\"nav-container\">\n");
    out.push_str("    <div class=\"logo\">Portfolio</div>\n");
    out.push_str("    <ul class=\"nav-links\">\n");
    for section in SectionId::ALL {
        out.push_str("      <li><button data-section=\"");
        out.push_str(section.as_str());
        out.push('"');
        if section == active {
            out.push_str(" class=\"active\" aria-current=\"page\"");
        }
        out.push('>');
        out.push_str(section.label());
        out.push_str("</button></li>\n");
    }
    out.push_str("    </ul>\n  </div>\n</nav>\n");
    out
}

fn render_about(out: &mut String) {
    out.push_str("<section id=\"about\" class=\"section\">\n");
    out.push_str("  <h1>Hi, I'm ");
    out.push_str(&escape_html(PROFILE.name));
    out.push_str("</h1>\n  <h2>");
    out.push_str(&escape_html(PROFILE.title));
    out.push_str("</h2>\n  <p>");
    out.push_str(&escape_html(PROFILE.description));
    out.push_str("</p>\n");
    out.push_str("  <button data-section=\"contact\" aria-label=\"Get in touch\">Get In Touch</button>\n");
    out.push_str("</section>\n");
}

fn render_projects(out: &mut String) {
    out.push_str("<section id=\"projects\" class=\"section\">\n");
    out.push_str("  <h2>Featured Projects</h2>\n");
    for project in PROJECTS {
        out.push_str("  <article class=\"project-card\">\n");
        out.push_str("    <div class=\"project-image\" style=\"background-color: ");
        out.push_str(project.color);
        out.push_str("\"></div>\n    <h3>");
        out.push_str(&escape_html(project.title));
        out.push_str("</h3>\n    <p>");
        out.push_str(&escape_html(project.description));
        out.push_str("</p>\n    <ul class=\"tech-stack\">");
        for tech in project.tech {
            out.push_str("<li>");
            out.push_str(&escape_html(tech));
            out.push_str("</li>");
        }
        out.push_str("</ul>\n    <a href=\"");
        out.push_str(project.demo);
        out.push_str("\">Live Demo</a> <a href=\"");
        out.push_str(project.github);
        out.push_str("\">GitHub</a>\n  </article>\n");
    }
    out.push_str("</section>\n");
}

fn render_skills(out: &mut String) {
    out.push_str("<section id=\"skills\" class=\"section\">\n");
    out.push_str("  <h2>Technical Skills</h2>\n");
    for skill in SKILLS {
        out.push_str("  <div class=\"skill\">\n    <span class=\"skill-icon\" aria-hidden=\"true\">");
        out.push_str(skill.icon);
        out.push_str("</span>\n    <span class=\"skill-name\">");
        out.push_str(&escape_html(skill.name));
        out.push_str("</span>\n    <div class=\"progress-bar\" role=\"progressbar\" aria-valuenow=\"");
        out.push_str(&skill.level.to_string());
        out.push_str("\" aria-valuemin=\"0\" aria-valuemax=\"100\"></div>\n  </div>\n");
    }
    out.push_str("</section>\n");
}

fn render_contact(out: &mut String) {
    out.push_str("<section id=\"contact\" class=\"section\">\n");
    out.push_str("  <h2>Get In Touch</h2>\n  <p>");
    out.push_str(&escape_html(CONTACT_BLURB));
    out.push_str("</p>\n  <ul class=\"social-links\">\n");
    for link in SOCIAL_LINKS {
        out.push_str("    <li><a href=\"");
        out.push_str(link.url);
        out.push_str("\" aria-label=\"");
        out.push_str(&escape_html(link.name));
        out.push_str(" profile\">");
        out.push_str(&escape_html(link.name));
        out.push_str("</a></li>\n");
    }
    out.push_str("  </ul>\n");
    out.push_str("  <form class=\"contact-form\">\n");
    for (field, kind) in [("name", "text"), ("email", "email")] {
        out.push_str("    <label for=\"");
        out.push_str(field);
        out.push_str("\">");
        out.push_str(&capitalize(field));
        out.push_str("</label>\n    <input type=\"");
        out.push_str(kind);
        out.push_str("\" id=\"");
        out.push_str(field);
        out.push_str("\" required aria-required=\"true\">\n");
    }
    out.push_str("    <label for=\"message\">Message</label>\n");
    out.push_str("    <textarea id=\"message\" rows=\"5\" required aria-required=\"true\"></textarea>\n");
    out.push_str("    <button type=\"submit\">Send Message</button>\n  </form>\n");
    out.push_str("</section>\n");
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Render the whole document: nav, the four sections in declared order,
/// and the footer.
pub fn render_page(active: SectionId) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Portfolio</title></head>\n<body>\n");
    out.push_str(&render_nav(active));
    out.push_str("<main>\n");
    render_about(&mut out);
    render_projects(&mut out);
    render_skills(&mut out);
    render_contact(&mut out);
    out.push_str("</main>\n<footer><p>&copy; 2026 ");
    out.push_str(&escape_html(PROFILE.name));
    out.push_str(". All rights reserved.</p></footer>\n</body>\n</html>\n");
    out
}
