//! CLI `score` command — print the affinity tree for one trainee.

use anyhow::Result;

use crate::affinity::{score_tree, AncestryTree, ScoreBreakdown};
use crate::config::AffinityConfig;

/// Score a tree and print it as a report (or JSON).
pub fn score(config: &AffinityConfig, tree: &AncestryTree, json: bool) -> Result<()> {
    let index = super::load_index(config)?;
    let breakdown = score_tree(tree, &index);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_tree(&breakdown));
        println!();
        println!("Note: this score does not include bonuses from mutual G1 race wins.");
    }
    Ok(())
}

/// Format a breakdown as a tree.
pub fn render_tree(breakdown: &ScoreBreakdown) -> String {
    let l = &breakdown.labels;
    let s = &breakdown.scores;
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line("--- Affinity Calculation Tree ---".into());
    line(format!("Trainee: {}", l.trainee));

    line(format!("├── Parent 1 Slot: {} [Subtotal: {}]", l.p1, s.p1_total));
    line(format!("│   ├── Trainee <-> P1 (2-way): {}", s.trainee_p1));
    line("│   └── Grandparents".into());
    line(format!("│       ├── T <-> P1 <-> GP1.1 ({}) (3-way): {}", l.p1_gp1, s.p1_gp1));
    line(format!("│       └── T <-> P1 <-> GP1.2 ({}) (3-way): {}", l.p1_gp2, s.p1_gp2));
    line("│".into());

    line(format!("├── Parent 2 Slot: {} [Subtotal: {}]", l.p2, s.p2_total));
    line(format!("│   ├── Trainee <-> P2 (2-way): {}", s.trainee_p2));
    line("│   └── Grandparents".into());
    line(format!("│       ├── T <-> P2 <-> GP2.1 ({}) (3-way): {}", l.p2_gp1, s.p2_gp1));
    line(format!("│       └── T <-> P2 <-> GP2.2 ({}) (3-way): {}", l.p2_gp2, s.p2_gp2));
    line("│".into());

    line(format!("├── Cross-Parent Affinity (P1 <-> P2) (2-way): {}", s.cross_parent));
    line("│".into());
    line(format!("└── TOTAL AFFINITY SCORE: {}", s.total));
    line("-".repeat(33));
    out
}
