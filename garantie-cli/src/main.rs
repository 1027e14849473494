mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use garantie_core::{
    analyze_scenarios, build_covering_design, compute_bounds, validate_proposed_count,
    CandidateSet, PrizeTable, GRID_PRICE,
};

use crate::display::{display_bounds, display_design, display_reports, display_validation};

#[derive(Parser)]
#[command(
    name = "garantie",
    about = "Moteur de garantie par plans couvrants pour le Loto (5/49 + numéro chance 1/10)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculer les bornes combinatoires pour une taille de jeu de candidats
    Bornes {
        /// Taille du jeu de candidats (5-49)
        #[arg(short, long)]
        taille: u64,
    },

    /// Valider un nombre de grilles proposé contre les bornes
    Valider {
        /// Taille du jeu de candidats (5-49)
        #[arg(short, long)]
        taille: u64,

        /// Nombre de grilles proposé
        #[arg(short, long)]
        grilles: u64,
    },

    /// Construire un plan couvrant garantissant 3 bons numéros
    Couverture {
        /// Numéros candidats, séparés par des virgules (5 à 20 numéros, 1-49)
        #[arg(short, long, value_delimiter = ',', required = true)]
        numeros: Vec<u8>,

        /// Numéros chance candidats, séparés par des virgules (1-10)
        #[arg(short, long, value_delimiter = ',')]
        chance: Vec<u8>,

        /// Prix unitaire d'une grille en euros
        #[arg(short, long, default_value_t = GRID_PRICE)]
        prix: f64,
    },

    /// Analyser les scénarios de recouvrement et le rendement attendu
    Scenarios {
        /// Numéros candidats, séparés par des virgules (5 à 20 numéros, 1-49)
        #[arg(short, long, value_delimiter = ',', required = true)]
        numeros: Vec<u8>,

        /// Numéros chance candidats, séparés par des virgules (1-10)
        #[arg(short, long, value_delimiter = ',')]
        chance: Vec<u8>,

        /// Prix unitaire d'une grille en euros
        #[arg(short, long, default_value_t = GRID_PRICE)]
        prix: f64,

        /// Fichier JSON des gains moyens par rang (défaut : barème Loto intégré)
        #[arg(short, long)]
        gains: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Bornes { taille } => cmd_bornes(taille),
        Command::Valider { taille, grilles } => cmd_valider(taille, grilles),
        Command::Couverture { numeros, chance, prix } => cmd_couverture(&numeros, &chance, prix),
        Command::Scenarios {
            numeros,
            chance,
            prix,
            gains,
        } => cmd_scenarios(&numeros, &chance, prix, gains.as_deref()),
    }
}

fn cmd_bornes(taille: u64) -> Result<()> {
    let bounds = compute_bounds(taille)?;
    display_bounds(taille, &bounds);
    Ok(())
}

fn cmd_valider(taille: u64, grilles: u64) -> Result<()> {
    let bounds = compute_bounds(taille)?;
    display_bounds(taille, &bounds);
    let validation = validate_proposed_count(grilles, &bounds);
    display_validation(&validation);
    Ok(())
}

fn cmd_couverture(numeros: &[u8], chance: &[u8], prix: f64) -> Result<()> {
    let set = CandidateSet::new(numeros, chance)?;
    let design = build_covering_design(&set, prix)?;
    display_design(&design);
    Ok(())
}

fn cmd_scenarios(numeros: &[u8], chance: &[u8], prix: f64, gains: Option<&Path>) -> Result<()> {
    let set = CandidateSet::new(numeros, chance)?;
    let prizes = load_prize_table(gains)?;
    let design = build_covering_design(&set, prix)?;
    display_design(&design);
    let reports = analyze_scenarios(&design, &set, prix, &prizes)?;
    display_reports(&reports);
    Ok(())
}

fn load_prize_table(path: Option<&Path>) -> Result<PrizeTable> {
    match path {
        Some(p) => {
            let json = std::fs::read_to_string(p)
                .with_context(|| format!("Impossible de lire {:?}", p))?;
            let table: PrizeTable =
                serde_json::from_str(&json).context("Fichier de gains invalide")?;
            Ok(table)
        }
        None => Ok(PrizeTable::default()),
    }
}
