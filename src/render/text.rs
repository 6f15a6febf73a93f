use crate::core::orders::{count_label, OrderStats};
use crate::core::social::extract_social_references;
use crate::domain::model::{Order, OrderStatus, Platform};
use crate::render::format::{format_date, format_price};
use crate::render::html::NO_SOCIALS_PLACEHOLDER;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

const TABLE_HEADERS: [&str; 9] = [
    "ID", "Client", "Téléphone", "Wilaya", "Commune", "Cartes", "Prix", "Statut", "Date",
];

fn table_row(order: &Order) -> [String; 9] {
    [
        format!("#{}", order.id_commande),
        order.nom.clone(),
        order.telephone.clone(),
        order.wilaya.clone(),
        order.commune.clone(),
        order.cards_display(),
        format!("{} DA", format_price(order.prix_total)),
        order.statut.label().to_string(),
        format_date(order.date_heure.as_deref()),
    ]
}

/// Fixed-width table with the count line underneath.
pub fn orders_table(orders: &[&Order]) -> String {
    if orders.is_empty() {
        return format!("Aucune commande\n{}\n", count_label(0));
    }

    let rows: Vec<[String; 9]> = orders.iter().map(|o| table_row(o)).collect();
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&format_line(&header[..]));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(&row[..]));
        out.push('\n');
    }
    out.push_str(&count_label(orders.len()));
    out.push('\n');
    out
}

pub fn stats_text(stats: &OrderStats) -> String {
    OrderStatus::KNOWN
        .iter()
        .map(|status| format!("{:<12}{}\n", status.label(), stats.get(status)))
        .collect()
}

/// One line per reference: `Instagram: @handle -> https://...`.
pub fn social_lines(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return vec![NO_SOCIALS_PLACEHOLDER.to_string()];
    }
    extract_social_references(raw)
        .into_iter()
        .map(|reference| {
            let label = match reference.platform {
                Platform::Instagram => format!("Instagram: {}", reference.display_label),
                _ => reference.display_label,
            };
            match reference.href {
                Some(href) => format!("{} -> {}", label, href),
                None => label,
            }
        })
        .collect()
}

pub fn order_detail_text(order: &Order) -> String {
    let mut lines = vec![
        format!("ID Commande:       #{}", order.id_commande),
        format!("Client:            {}", order.nom),
        format!("Téléphone:         {}", order.telephone),
        format!(
            "Wilaya:            {} ({})",
            order.wilaya,
            order.wilaya_code_display()
        ),
        format!("Commune:           {}", order.commune),
        format!("Nombre de cartes:  {}", order.cards_display()),
        format!("Prix total:        {} DA", format_price(order.prix_total)),
        "Réseaux sociaux:".to_string(),
    ];
    lines.extend(social_lines(order.socials()).into_iter().map(|l| format!("  - {}", l)));
    lines.push(format!("Statut:            {}", order.statut.label()));
    lines.push(format!(
        "Date de commande:  {}",
        format_date(order.date_heure.as_deref())
    ));
    lines.join("\n") + "\n"
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id_commande: i64,
    nom: &'a str,
    telephone: &'a str,
    wilaya: &'a str,
    wilaya_code: String,
    commune: &'a str,
    nombre_cartes: String,
    prix_total: Option<f64>,
    statut: &'a str,
    date_heure: Option<&'a str>,
    reseaux_sociaux: &'a str,
}

pub fn write_csv<W: Write>(orders: &[&Order], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for order in orders {
        csv_writer.serialize(CsvRow {
            id_commande: order.id_commande,
            nom: &order.nom,
            telephone: &order.telephone,
            wilaya: &order.wilaya,
            wilaya_code: order.wilaya_code_display(),
            commune: &order.commune,
            nombre_cartes: order.cards_display(),
            prix_total: order.prix_total,
            statut: order.statut.code(),
            date_heure: order.date_heure.as_deref(),
            reseaux_sociaux: order.socials(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        serde_json::from_value(serde_json::json!({
            "id_commande": 12,
            "nom": "Lina",
            "telephone": "0666123123",
            "wilaya": "Tizi Ouzou",
            "wilaya_code": 15,
            "commune": "Azazga",
            "nombre_cartes": 1,
            "prix_total": "1200.5",
            "statut": "ANNULEE",
            "date_heure": "2024-02-10 08:15:00",
            "reseaux_sociaux": "@lina.dz\nhello, Facebook: fb.com/lina"
        }))
        .unwrap()
    }

    #[test]
    fn test_table_contains_rows_and_count() {
        let order = sample();
        let table = orders_table(&[&order]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("#12"));
        assert!(lines[2].contains("1\u{202f}200,50 DA"));
        assert!(lines[2].contains("Annulée"));
        assert_eq!(lines.last(), Some(&"1 commande"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(orders_table(&[]), "Aucune commande\n0 commandes\n");
    }

    #[test]
    fn test_social_lines() {
        assert_eq!(
            social_lines(sample().socials()),
            vec![
                "Instagram: @lina.dz -> https://instagram.com/lina.dz".to_string(),
                "hello".to_string(),
                "Facebook -> https://fb.com/lina".to_string(),
            ]
        );
        assert_eq!(social_lines(""), vec![NO_SOCIALS_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_detail_text() {
        let text = order_detail_text(&sample());
        assert!(text.contains("Wilaya:            Tizi Ouzou (15)"));
        assert!(text.contains("  - hello\n"));
        assert!(text.contains("10 février 2024 à 08:15"));
    }

    #[test]
    fn test_stats_text() {
        let stats = OrderStats {
            en_attente: 3,
            confirmee: 2,
            livree: 1,
            annulee: 0,
        };
        let text = stats_text(&stats);
        assert!(text.starts_with("En Attente  3\n"));
        assert!(text.ends_with("Annulée     0\n"));
    }

    #[test]
    fn test_write_csv() {
        let order = sample();
        let mut buffer = Vec::new();
        write_csv(&[&order], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id_commande,nom,telephone,wilaya,wilaya_code,commune,nombre_cartes,prix_total,statut,date_heure,reseaux_sociaux")
        );
        assert!(lines
            .next()
            .unwrap()
            .starts_with("12,Lina,0666123123,Tizi Ouzou,15,Azazga,1,1200.5,ANNULEE,2024-02-10 08:15:00,"));
    }
}
