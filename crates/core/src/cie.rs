//! Continuous internal evaluation (CIE) scoring.
//!
//! A subject's credit count selects one of two schemes. Both produce a total
//! out of 50, either as a spreadsheet formula written into the downloadable
//! template or as a number computed server-side for uploaded rows that do
//! not carry a total of their own.

use serde::Serialize;
use serde_json::Value;

use crate::roster::USN_ALIASES;

/// Header of the computed total column.
pub const TOTAL_HEADER: &str = "Total CIE (50)";

/// Maximum marks of one internal assessment (IA).
pub const IA_MAX: f64 = 40.0;

/// Credit count that switches on the lab-bearing scheme.
pub const LAB_CREDITS: i32 = 4;

// ---------------------------------------------------------------------------
// Credit scheme
// ---------------------------------------------------------------------------

/// Scoring scheme derived from a subject's credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditScheme {
    /// 4 credits: IA scaled to 15, assignments to 10, lab CIE 15 + lab test 10.
    FourCredit,
    /// Any other credit count: IA scaled to 25, assignments to 25.
    Standard,
}

impl CreditScheme {
    pub fn from_credits(credits: i32) -> Self {
        if credits == LAB_CREDITS {
            Self::FourCredit
        } else {
            Self::Standard
        }
    }

    /// Column headers of the template sheet, in order.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::FourCredit => &[
                "SL No",
                "USN",
                "Name",
                "IA1",
                "IA2",
                "IA3",
                "ASG1",
                "ASG2",
                "Lab CIE",
                "Lab Test",
                TOTAL_HEADER,
            ],
            Self::Standard => &[
                "SL No",
                "USN",
                "Name",
                "IA1",
                "IA2",
                "IA3",
                "ASG1",
                "ASG2",
                TOTAL_HEADER,
            ],
        }
    }

    /// Column widths matching [`CreditScheme::headers`].
    pub fn column_widths(&self) -> &'static [u32] {
        match self {
            Self::FourCredit => &[6, 12, 28, 8, 8, 8, 8, 8, 10, 10, 12],
            Self::Standard => &[6, 12, 28, 8, 8, 8, 8, 8, 12],
        }
    }

    /// Spreadsheet formula for the total cell of 1-based sheet row `row`.
    ///
    /// IA marks live in columns D..F, assignments in G..H, and for the
    /// four-credit scheme lab marks in I..J.
    pub fn total_formula(&self, row: usize) -> String {
        match self {
            Self::FourCredit => format!(
                "=CEILING( ( (LARGE(D{row}:F{row},1)+LARGE(D{row}:F{row},2))/2 )/40*15 \
                 + ( (G{row}+H{row})/2 )/25*10 + (I{row}+J{row}), 1)"
            ),
            Self::Standard => format!(
                "=CEILING( ( (LARGE(D{row}:F{row},1)+LARGE(D{row}:F{row},2))/2 )/40*25 \
                 + (G{row}+H{row})/50*25, 1)"
            ),
        }
    }

    /// Compute the total for one row of marks, rounded up to a whole mark.
    pub fn compute_total(&self, marks: &MarkValues) -> f64 {
        let internal = best_two_average(&[marks.ia1, marks.ia2, marks.ia3]) / IA_MAX;
        match self {
            Self::FourCredit => {
                let assignments = average_present(&[marks.asg1, marks.asg2]);
                let lab = marks.lab_cie.unwrap_or(0.0) + marks.lab_test.unwrap_or(0.0);
                (internal * 15.0 + assignments / 25.0 * 10.0 + lab).ceil()
            }
            Self::Standard => {
                let assignments = marks.asg1.unwrap_or(0.0) + marks.asg2.unwrap_or(0.0);
                (internal * 25.0 + assignments / 50.0 * 25.0).ceil()
            }
        }
    }
}

/// Average of the two best IA marks; missing marks are dropped, then the
/// list is padded with zeros to two entries.
fn best_two_average(values: &[Option<f64>]) -> f64 {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    while present.len() < 2 {
        present.push(0.0);
    }
    present.sort_by(|a, b| b.total_cmp(a));
    (present[0] + present[1]) / 2.0
}

fn average_present(values: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Uploaded marks rows
// ---------------------------------------------------------------------------

/// Numeric cells of one marks row. `None` means blank or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MarkValues {
    pub ia1: Option<f64>,
    pub ia2: Option<f64>,
    pub ia3: Option<f64>,
    pub asg1: Option<f64>,
    pub asg2: Option<f64>,
    pub lab_cie: Option<f64>,
    pub lab_test: Option<f64>,
    pub total: Option<f64>,
}

const IA1_ALIASES: &[&str] = &["ia1", "ia 1", "ia1 (40)", "ia1 ( 40 )"];
const IA2_ALIASES: &[&str] = &["ia2", "ia 2", "ia2 (40)"];
const IA3_ALIASES: &[&str] = &["ia3", "ia 3", "ia3 (40)"];
const ASG1_ALIASES: &[&str] = &["asg1", "asg 1", "asg1 (25)", "asg1 (20)"];
const ASG2_ALIASES: &[&str] = &["asg2", "asg 2", "asg2 (25)", "asg2 (20)"];
const LAB_CIE_ALIASES: &[&str] = &["lab cie", "lab_cie", "lab cie (15)"];
const LAB_TEST_ALIASES: &[&str] = &["lab test", "lab_test", "lab test (10)"];
const TOTAL_ALIASES: &[&str] = &["total", "total cie", "total cie (50)", "total cie ( 50 )"];

/// A marks row keyed by roll number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkRow {
    pub usn: String,
    pub marks: MarkValues,
}

impl MarkRow {
    /// Parse one uploaded row. Headers are matched case-insensitively after
    /// trimming. Returns `None` if the row has no usable roll number.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;
        let cells: Vec<(String, &Value)> = obj
            .iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();

        let number = |aliases: &[&str]| lookup(&cells, aliases).and_then(cell_number);

        let usn_aliases: Vec<String> = USN_ALIASES.iter().map(|a| a.to_lowercase()).collect();
        let usn = cells
            .iter()
            .filter(|(k, _)| usn_aliases.iter().any(|a| a == k) || k == "u s n")
            .find_map(|(_, v)| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })?;

        Some(Self {
            usn,
            marks: MarkValues {
                ia1: number(IA1_ALIASES),
                ia2: number(IA2_ALIASES),
                ia3: number(IA3_ALIASES),
                asg1: number(ASG1_ALIASES),
                asg2: number(ASG2_ALIASES),
                lab_cie: number(LAB_CIE_ALIASES),
                lab_test: number(LAB_TEST_ALIASES),
                total: number(TOTAL_ALIASES),
            },
        })
    }
}

fn lookup<'a>(cells: &[(String, &'a Value)], aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|alias| cells.iter().find(|(k, _)| k == alias).map(|(_, v)| *v))
}

/// Numeric value of a cell. `NaN` and infinities count as blank.
fn cell_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Result of scoring one uploaded row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    pub usn: String,
    pub total: f64,
    /// `true` when the total was computed here rather than taken from the row.
    pub computed: bool,
}

/// Score a row: keep a supplied total, otherwise compute one.
pub fn score_row(scheme: CreditScheme, row: &MarkRow) -> ScoredRow {
    match row.marks.total {
        Some(total) => ScoredRow {
            usn: row.usn.clone(),
            total,
            computed: false,
        },
        None => ScoredRow {
            usn: row.usn.clone(),
            total: scheme.compute_total(&row.marks),
            computed: true,
        },
    }
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// One student line of a marks template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRow {
    pub sl_no: usize,
    pub usn: String,
    pub name: String,
    pub total_formula: String,
}

/// A marks-entry template ready to be rendered as a spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarksTemplate {
    pub title: String,
    pub credits: i32,
    pub scheme: CreditScheme,
    pub headers: Vec<&'static str>,
    pub column_widths: Vec<u32>,
    pub rows: Vec<TemplateRow>,
}

/// Build a template for the given `(usn, name)` students, in the order given.
///
/// The header occupies sheet row 1, so student `i` (0-based) sits on row `i + 2`.
pub fn build_template(title: &str, credits: i32, students: &[(String, String)]) -> MarksTemplate {
    let scheme = CreditScheme::from_credits(credits);
    let rows = students
        .iter()
        .enumerate()
        .map(|(i, (usn, name))| TemplateRow {
            sl_no: i + 1,
            usn: usn.clone(),
            name: name.clone(),
            total_formula: scheme.total_formula(i + 2),
        })
        .collect();

    MarksTemplate {
        title: title.to_string(),
        credits,
        scheme,
        headers: scheme.headers().to_vec(),
        column_widths: scheme.column_widths().to_vec(),
        rows,
    }
}
