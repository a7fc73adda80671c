//! Declarative per-role label patterns.
//!
//! Each role carries an ordered list of patterns; a header matches a pattern
//! when its folded form contains every `requires` fragment and none of the
//! `excludes` fragments. First matching header wins, no scoring.

use registry_model::ColumnRole;

/// One substring pattern over folded header labels.
#[derive(Debug, Clone, Copy)]
pub struct LabelPattern {
    pub requires: &'static [&'static str],
    pub excludes: &'static [&'static str],
}

impl LabelPattern {
    pub fn matches(&self, folded_header: &str) -> bool {
        self.requires.iter().all(|frag| folded_header.contains(frag))
            && !self.excludes.iter().any(|frag| folded_header.contains(frag))
    }
}

/// Ordered candidate patterns for a role.
pub fn role_patterns(role: ColumnRole) -> &'static [LabelPattern] {
    match role {
        ColumnRole::Sex => &[
            LabelPattern {
                requires: &["genero"],
                excludes: &[],
            },
            LabelPattern {
                requires: &["sexo"],
                excludes: &[],
            },
        ],
        ColumnRole::ConsultDate => &[LabelPattern {
            requires: &["primeira consulta"],
            excludes: &[],
        }],
        ColumnRole::BirthDate => &[LabelPattern {
            requires: &["nascimento"],
            excludes: &[],
        }],
        ColumnRole::Age => &[LabelPattern {
            requires: &["idade"],
            excludes: &[],
        }],
        ColumnRole::DeathDate => &[LabelPattern {
            requires: &["data", "obito"],
            excludes: &[],
        }],
        ColumnRole::DeathFlag => &[LabelPattern {
            requires: &["obito"],
            excludes: &["data"],
        }],
        ColumnRole::RelapseFlag => &[
            LabelPattern {
                requires: &["recidiva", "(s) ou (n)"],
                excludes: &[],
            },
            LabelPattern {
                requires: &["recidiva"],
                excludes: &["data"],
            },
        ],
        ColumnRole::RelapseDate => &[LabelPattern {
            requires: &["data", "recidiva"],
            excludes: &[],
        }],
        ColumnRole::StageText => &[
            LabelPattern {
                requires: &["estadiamento"],
                excludes: &[],
            },
            LabelPattern {
                requires: &["estagio"],
                excludes: &[],
            },
            LabelPattern {
                requires: &["estadio"],
                excludes: &[],
            },
        ],
    }
}
