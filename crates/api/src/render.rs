//! Server-side HTML rendering for the marketing pages.
//!
//! The markup is deliberately plain: semantic sections with no styling or
//! scripts, built with `format!`. Every piece of content interpolated into
//! the page goes through [`escape`] first.

use lioncash_content::model::{BusinessProfile, FaqEntry, ServiceRecord, StateRecord};
use lioncash_content::resolver::{
    Breadcrumb, ComplianceDisplay, ResolvedCityPage, ResolvedServicePage, ResolvedStatePage,
};

/// Escape text for safe interpolation into HTML body or attribute content.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn document(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<meta name=\"description\" content=\"{}\">\n</head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        escape(description),
        body
    )
}

fn breadcrumb_nav(crumbs: &[Breadcrumb]) -> String {
    let items: Vec<String> = crumbs
        .iter()
        .map(|c| format!("<li><a href=\"{}\">{}</a></li>", escape(&c.url), escape(&c.label)))
        .collect();
    format!(
        "<nav aria-label=\"breadcrumb\"><ol>{}</ol></nav>",
        items.join("")
    )
}

fn hero_section(h1: &str, subheadline: &str, cta_text: &str, cta_url: &str) -> String {
    format!(
        "<section class=\"hero\"><h1>{}</h1><p>{}</p><a href=\"{}\">{}</a></section>",
        escape(h1),
        escape(subheadline),
        escape(cta_url),
        escape(cta_text)
    )
}

fn faq_section(faq: &[FaqEntry]) -> String {
    if faq.is_empty() {
        return String::new();
    }
    let items: Vec<String> = faq
        .iter()
        .map(|f| {
            format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape(&f.question),
                escape(&f.answer)
            )
        })
        .collect();
    format!(
        "<section class=\"faq\"><h2>Frequently Asked Questions</h2>{}</section>",
        items.join("")
    )
}

fn compliance_section(compliance: &ComplianceDisplay) -> String {
    let points: Vec<String> = compliance
        .key_points
        .iter()
        .map(|p| format!("<li>{}</li>", escape(p)))
        .collect();
    format!(
        "<section class=\"compliance\"><h2>{}</h2><p>{}</p><p>{}</p>\
         <p>Rate cap: {}</p><p>Loan limit: {}</p><ul>{}</ul>\
         <p class=\"disclaimer\">{}</p></section>",
        escape(&compliance.headline),
        escape(&compliance.legal_status),
        escape(&compliance.regulatory_contact),
        escape(&compliance.rate_cap),
        escape(&compliance.loan_limit),
        points.join(""),
        escape(&compliance.disclaimer)
    )
}

fn services_section(heading: &str, services: &[ServiceRecord]) -> String {
    let items: Vec<String> = services
        .iter()
        .map(|s| {
            format!(
                "<li><a href=\"/services/{}\">{}</a> — {}</li>",
                escape(&s.slug),
                escape(&s.name),
                escape(&s.short_description)
            )
        })
        .collect();
    format!(
        "<section class=\"services\"><h2>{}</h2><ul>{}</ul></section>",
        escape(heading),
        items.join("")
    )
}

// ---------------------------------------------------------------------------
// Location pages
// ---------------------------------------------------------------------------

pub fn city_page(page: &ResolvedCityPage) -> String {
    let seo = page.seo.get();
    let hero = page.hero.get();
    let proof = page.local_proof.get();
    let nap = page.nap.get();

    let mut body = String::new();
    body.push_str(&breadcrumb_nav(&page.breadcrumbs));
    body.push_str(&hero_section(
        &hero.h1,
        &hero.subheadline,
        &hero.cta_text,
        &hero.cta_url,
    ));

    body.push_str(&format!(
        "<section class=\"local-proof\"><h2>{}</h2><p>{}</p></section>",
        escape(&proof.headline),
        escape(&proof.directions)
    ));

    body.push_str(&format!(
        "<section class=\"nap\"><p>{}</p><address>{}, {}, {} {}</address><p>{}</p></section>",
        escape(&nap.name),
        escape(&nap.street),
        escape(&nap.city),
        escape(&nap.state),
        escape(&nap.zip),
        escape(&nap.phone)
    ));

    if !page.reviews.is_empty() {
        let items: Vec<String> = page
            .reviews
            .iter()
            .map(|r| {
                format!(
                    "<blockquote><p>{}</p><footer>{} — {}/5</footer></blockquote>",
                    escape(&r.text),
                    escape(&r.name),
                    r.rating
                )
            })
            .collect();
        body.push_str(&format!(
            "<section class=\"reviews\"><h2>Customer Reviews</h2>{}</section>",
            items.join("")
        ));
    }

    body.push_str(&faq_section(&page.faq));

    if !page.nearby_cities.is_empty() {
        let items: Vec<String> = page
            .nearby_cities
            .iter()
            .map(|n| {
                format!(
                    "<li><a href=\"/locations/{}/{}\">{}</a> ({} mi)</li>",
                    escape(&page.state_slug),
                    escape(&n.slug),
                    escape(&n.name),
                    n.distance_miles
                )
            })
            .collect();
        body.push_str(&format!(
            "<section class=\"nearby\"><h2>Nearby Cities</h2><ul>{}</ul></section>",
            items.join("")
        ));
    }

    if let Some(compliance) = &page.compliance {
        body.push_str(&compliance_section(compliance));
    }

    body.push_str(&services_section("Our Services", &page.services));

    document(&seo.title, &seo.meta_description, &body)
}

pub fn state_page(page: &ResolvedStatePage) -> String {
    let mut body = String::new();
    body.push_str(&breadcrumb_nav(&page.breadcrumbs));
    body.push_str(&hero_section(
        &page.hero.h1,
        &page.hero.subheadline,
        &page.hero.cta_text,
        &page.hero.cta_url,
    ));

    let items: Vec<String> = page
        .cities
        .iter()
        .map(|c| {
            format!(
                "<li><a href=\"/locations/{}/{}\">{}</a></li>",
                escape(&page.state_slug),
                escape(&c.slug),
                escape(&c.name)
            )
        })
        .collect();
    body.push_str(&format!(
        "<section class=\"cities\"><h2>Cities We Serve in {}</h2><ul>{}</ul></section>",
        escape(&page.state),
        items.join("")
    ));

    if let Some(compliance) = &page.compliance {
        body.push_str(&compliance_section(compliance));
    }

    body.push_str(&services_section("Our Services", &page.services));

    document(
        &format!("Cash Advance Loans in {} | Lion Cash Advance", page.state),
        &format!(
            "Fast cash advance loans across {}. Find your city and apply online.",
            page.state
        ),
        &body,
    )
}

pub fn locations_index(states: &[StateRecord]) -> String {
    let items: Vec<String> = states
        .iter()
        .map(|s| {
            format!(
                "<li><a href=\"/locations/{}\">{}</a> ({} cities)</li>",
                escape(&lioncash_core::slug::slugify(&s.state)),
                escape(&s.state),
                s.cities.len()
            )
        })
        .collect();
    let body = format!(
        "<h1>Locations</h1><ul>{}</ul>",
        items.join("")
    );
    document(
        "Locations | Lion Cash Advance",
        "All states and cities served by Lion Cash Advance.",
        &body,
    )
}

// ---------------------------------------------------------------------------
// Service pages
// ---------------------------------------------------------------------------

pub fn service_page(page: &ResolvedServicePage) -> String {
    let mut body = String::new();
    body.push_str(&breadcrumb_nav(&page.breadcrumbs));
    body.push_str(&hero_section(
        &page.hero.h1,
        &page.hero.subheadline,
        &page.hero.cta_text,
        &page.hero.cta_url,
    ));

    body.push_str(&format!(
        "<section class=\"description\"><p>{}</p><p>Amounts: {}</p><p>Terms: {}</p></section>",
        escape(&page.service.long_description),
        escape(&page.service.amount_range),
        escape(&page.service.term_range)
    ));

    if !page.service.benefits.is_empty() {
        let items: Vec<String> = page
            .service
            .benefits
            .iter()
            .map(|b| format!("<li>{}</li>", escape(b)))
            .collect();
        body.push_str(&format!(
            "<section class=\"benefits\"><h2>Benefits</h2><ul>{}</ul></section>",
            items.join("")
        ));
    }

    body.push_str(&faq_section(&page.service.faq));

    if !page.siblings.is_empty() {
        body.push_str(&services_section("Other Loan Options", &page.siblings));
    }

    document(
        &format!("{} | Lion Cash Advance", page.service.name),
        &page.service.short_description,
        &body,
    )
}

pub fn services_index(services: &[ServiceRecord]) -> String {
    let body = format!(
        "<h1>Loan Services</h1>{}",
        services_section("What We Offer", services)
    );
    document(
        "Loan Services | Lion Cash Advance",
        "Compare the short-term loan options Lion Cash Advance offers.",
        &body,
    )
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

pub fn home(profile: &BusinessProfile, services: &[ServiceRecord]) -> String {
    let mut body = String::new();
    body.push_str(&hero_section(
        &format!("{} — {}", profile.business_name, profile.tagline),
        "Get the cash you need today with a fast, simple application.",
        "Apply Now",
        "/apply",
    ));
    body.push_str(&services_section("Our Services", services));
    body.push_str(&format!(
        "<section class=\"contact-strip\"><p>Call us: {}</p></section>",
        escape(&profile.phone)
    ));
    document(
        &format!("{} | Fast Cash Advance Loans", profile.business_name),
        &profile.tagline,
        &body,
    )
}

pub fn about(profile: &BusinessProfile) -> String {
    let values: Vec<String> = profile
        .about
        .values
        .iter()
        .map(|v| format!("<li>{}</li>", escape(v)))
        .collect();
    let body = format!(
        "<h1>{}</h1><p>{}</p><p>{}</p><ul>{}</ul><p>Serving customers since {}.</p>",
        escape(&profile.about.headline),
        escape(&profile.about.description),
        escape(&profile.about.mission),
        values.join(""),
        profile.founded_year
    );
    document(
        &format!("About Us | {}", profile.business_name),
        &profile.about.mission,
        &body,
    )
}

pub fn contact(profile: &BusinessProfile) -> String {
    let hq = &profile.headquarters;
    let hours: Vec<String> = profile
        .hours
        .iter()
        .map(|(day, times)| format!("<li>{}: {}</li>", escape(day), escape(times)))
        .collect();
    let body = format!(
        "<h1>Contact Us</h1><p>Phone: {}</p><p>Email: {}</p>\
         <address>{}, {}, {} {}</address><ul>{}</ul>\
         <form method=\"post\" action=\"/api/contact\">\
         <input name=\"name\" required><input name=\"email\" type=\"email\" required>\
         <input name=\"phone\"><textarea name=\"message\" required></textarea>\
         <button type=\"submit\">Send</button></form>",
        escape(&profile.phone),
        escape(&profile.email),
        escape(&hq.street),
        escape(&hq.city),
        escape(&hq.state),
        escape(&hq.zip),
        hours.join("")
    );
    document(
        &format!("Contact Us | {}", profile.business_name),
        "Get in touch with the Lion Cash Advance team.",
        &body,
    )
}

pub fn apply(profile: &BusinessProfile) -> String {
    let body = format!(
        "<h1>Apply for a Cash Advance</h1>\
         <p>Complete the form below and we will get back to you the same business day.</p>\
         <form method=\"post\" action=\"/api/quote\">\
         <input name=\"name\" required><input name=\"email\" type=\"email\" required>\
         <input name=\"phone\" type=\"tel\" required><input name=\"loanAmount\">\
         <button type=\"submit\">Request a Quote</button></form>\
         <p>Prefer to talk? Call {}.</p>",
        escape(&profile.phone)
    );
    document(
        &format!("Apply Online | {}", profile.business_name),
        "Apply online for a fast cash advance loan.",
        &body,
    )
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

/// Build the sitemap XML from the enumerated route set.
pub fn sitemap(base_url: &str, paths: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str(&format!("  <url><loc>{}{}</loc></url>\n", escape(base), escape(path)));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Miami, FL 33101"), "Miami, FL 33101");
    }

    #[test]
    fn sitemap_joins_base_and_paths() {
        let xml = sitemap(
            "https://example.com/",
            &["/".to_string(), "/locations/florida/miami".to_string()],
        );
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/locations/florida/miami</loc>"));
        assert!(xml.starts_with("<?xml"));
    }
}
