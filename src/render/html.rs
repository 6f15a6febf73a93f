//! HTML fragment of the order detail modal.

use crate::core::social::extract_social_references;
use crate::domain::model::{Order, Platform, SocialReference};
use crate::render::format::{escape_html, format_date, format_price};

pub const NO_SOCIALS_PLACEHOLDER: &str = "Aucun réseau social renseigné";

/// Anchor or paragraph for one reference. Label and href are escaped here.
pub fn social_reference_html(reference: &SocialReference) -> String {
    let icon = reference.platform.icon_class();
    let label = escape_html(&reference.display_label);
    let text = match reference.platform {
        Platform::Instagram => format!("Instagram: {}", label),
        _ => label,
    };

    match &reference.href {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer"><i class="{}"></i> {}</a>"#,
            escape_html(href),
            icon,
            text
        ),
        None => format!(r#"<p><i class="{}"></i> {}</p>"#, icon, text),
    }
}

/// Links block for a raw social field, or the placeholder when it is blank.
pub fn social_links_html(raw: &str) -> String {
    if raw.trim().is_empty() {
        return format!(
            r#"<p style="color: #999; font-style: italic;">{}</p>"#,
            NO_SOCIALS_PLACEHOLDER
        );
    }

    let links: String = extract_social_references(raw)
        .iter()
        .map(social_reference_html)
        .collect();
    format!(r#"<div class="social-links">{}</div>"#, links)
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-row"><div class="detail-label">{}:</div><div class="detail-value">{}</div></div>"#,
        label, value
    )
}

pub fn order_detail_html(order: &Order) -> String {
    let status_badge = format!(
        r#"<span class="status-badge {}">{}</span>"#,
        order.statut.css_class(),
        escape_html(order.statut.label())
    );

    [
        detail_row(
            "ID Commande",
            &format!("<strong>#{}</strong>", order.id_commande),
        ),
        detail_row("Client", &escape_html(&order.nom)),
        detail_row("Téléphone", &escape_html(&order.telephone)),
        detail_row(
            "Wilaya",
            &format!(
                "{} ({})",
                escape_html(&order.wilaya),
                escape_html(&order.wilaya_code_display())
            ),
        ),
        detail_row("Commune", &escape_html(&order.commune)),
        detail_row(
            "Nombre de cartes",
            &format!("<strong>{}</strong>", escape_html(&order.cards_display())),
        ),
        detail_row(
            "Prix total",
            &format!("<strong>{} DA</strong>", format_price(order.prix_total)),
        ),
        detail_row("Réseaux sociaux", &social_links_html(order.socials())),
        detail_row("Statut", &status_badge),
        detail_row(
            "Date de commande",
            &format_date(order.date_heure.as_deref()),
        ),
    ]
    .join("\n")
}
