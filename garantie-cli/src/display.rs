use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use garantie_core::{validate_proposed_count, Bounds, CoveringDesign, ScenarioReport, Validation, Verdict};

pub fn display_bounds(n: u64, bounds: &Bounds) {
    println!("\n📐 Bornes pour {} candidats\n", n);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Borne", "Grilles"]);

    table.add_row(vec![
        "Divisibilité (plancher absolu)",
        &bounds.lower_simple.to_string(),
    ]);
    table.add_row(vec!["Schönheim", &bounds.lower_schonheim.to_string()]);
    table.add_row(vec!["Minimum prouvé", &bounds.minimum.to_string()]);
    table.add_row(vec![
        "Plafond probabiliste (glouton)",
        &bounds.upper_probabilistic.to_string(),
    ]);
    println!("{table}");
}

pub fn display_validation(validation: &Validation) {
    let color = match validation.verdict {
        Verdict::Impossible => Color::Red,
        Verdict::Optimal => Color::Green,
        Verdict::Plausible => Color::Yellow,
        Verdict::Suspect => Color::Red,
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Verdict", "Détail"]);
    table.add_row(vec![
        Cell::new(validation.verdict.to_string()).fg(color),
        Cell::new(&validation.message),
    ]);
    println!("{table}");
}

pub fn display_design(design: &CoveringDesign) {
    println!("\n🎟️  Plan couvrant : {} grilles\n", design.size());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros", "Chance"]);

    for (i, ticket) in design.tickets.iter().enumerate() {
        let numbers = ticket
            .numbers
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        let chance = match ticket.chance {
            Some(c) => format!("{:2}", c),
            None => "—".to_string(),
        };
        table.add_row(vec![&format!("{}", i + 1), &numbers, &chance]);
    }
    println!("{table}");

    let validation = validate_proposed_count(design.size() as u64, &design.bounds);
    println!(
        "Coût total : {:.2} € — minimum prouvé : {} grilles — taille du plan : {}",
        design.cost, design.bounds.minimum, validation.verdict
    );
}

pub fn display_reports(reports: &[ScenarioReport]) {
    println!("\n📊 Scénarios de recouvrement (m = numéros du tirage parmi les candidats)\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "m",
            "Répartition 5/4/3/2/1/0",
            "Meilleur rang",
            "Coût",
            "Gain attendu",
            "Bénéfice net",
            "ROI",
            "Seuil de rentabilité",
        ]);

    for r in reports {
        let spread = (0..=5)
            .rev()
            .map(|k| r.match_counts[k].to_string())
            .collect::<Vec<_>>()
            .join("/");
        let rank = match r.best_rank {
            Some(rank) => format!("rang {}", rank),
            None => "aucun".to_string(),
        };
        let break_even = if r.break_even_probability > 1.0 {
            "jamais".to_string()
        } else {
            format!("{:.4}", r.break_even_probability)
        };
        let roi_color = if r.net_benefit >= 0.0 { Color::Green } else { Color::Red };

        table.add_row(vec![
            Cell::new(r.overlap.to_string()),
            Cell::new(spread),
            Cell::new(rank),
            Cell::new(format!("{:.2} €", r.total_cost)),
            Cell::new(format!("{:.2} €", r.expected_gain)),
            Cell::new(format!("{:+.2} €", r.net_benefit)),
            Cell::new(format!("{:+.1} %", r.roi * 100.0)).fg(roi_color),
            Cell::new(break_even),
        ]);
    }
    println!("{table}");
}
