//! Sequential entity codes.
//!
//! Codes look like `CLT-2025-0007` (year-scoped kinds) or `EXP-2025-03-0012`
//! (month-scoped kinds). The next sequence number is always derived from the
//! codes the caller passes in: the largest well-formed suffix in the target
//! scope plus one, or 1 when the scope is empty. Nothing is remembered
//! between calls, so two callers working from the same snapshot will produce
//! the same code. Uniqueness has to be enforced where the code is stored.

use crate::models::{CodeInfo, CodeMonth, Coded, EntityKind};
use crate::services::clock::{Clock, SystemClock};
use crate::services::metrics::{CODES_GENERATED_TOTAL, MALFORMED_CODES_SKIPPED_TOTAL};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::{debug, instrument};

/// Minimum width of the sequence part. Larger numbers are never truncated.
const SEQUENCE_WIDTH: usize = 4;

const UNIQUE_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One anchored pattern per kind, in `EntityKind::ALL` order.
static CODE_PATTERNS: Lazy<Vec<(EntityKind, Regex)>> = Lazy::new(|| {
    EntityKind::ALL
        .into_iter()
        .map(|kind| {
            let pattern = if kind.is_month_scoped() {
                format!(r"^{}-(\d{{4}})-(\d{{2}})-(\d+)$", kind.prefix())
            } else {
                format!(r"^{}-(\d{{4}})-(\d+)$", kind.prefix())
            };
            let regex = Regex::new(&pattern).expect("Invalid entity code pattern");
            (kind, regex)
        })
        .collect()
});

fn pattern_for(kind: EntityKind) -> &'static Regex {
    CODE_PATTERNS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, regex)| regex)
        .expect("Every entity kind has a code pattern")
}

/// Generates entity codes, reading "now" from an injectable clock.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl CodeGenerator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> CodeGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Scope month for "now" according to this generator's clock.
    pub fn current_month(&self) -> CodeMonth {
        CodeMonth::from(self.clock.now().date_naive())
    }

    /// Next `CLT-YYYY-NNNN` code for the current year.
    pub fn generate_client_code<I>(&self, existing: I) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code(EntityKind::Client, existing)
    }

    /// Next `PRJ-YYYY-NNNN` code for the current year.
    pub fn generate_project_code<I>(&self, existing: I) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code(EntityKind::Project, existing)
    }

    /// Next `INV-YYYY-NNNN` code for the current year.
    pub fn generate_invoice_code<I>(&self, existing: I) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code(EntityKind::Invoice, existing)
    }

    /// Next `TMS-YYYY-MM-NNNN` code for the given month.
    pub fn generate_timesheet_code<I>(&self, existing: I, month: CodeMonth) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code_in(EntityKind::Timesheet, existing, month)
    }

    /// Next `EXP-YYYY-MM-NNNN` code for the given month.
    pub fn generate_expense_code<I>(&self, existing: I, month: CodeMonth) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code_in(EntityKind::Expense, existing, month)
    }

    /// Next `RCP-YYYY-MM-NNNN` code for the given month.
    pub fn generate_receipt_code<I>(&self, existing: I, month: CodeMonth) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code_in(EntityKind::Receipt, existing, month)
    }

    /// Next `PAY-YYYY-MM-NNNN` code for the given month.
    pub fn generate_payment_code<I>(&self, existing: I, month: CodeMonth) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code_in(EntityKind::Payment, existing, month)
    }

    /// Next code for `kind`, scoped to the clock's current year (and month,
    /// for month-scoped kinds).
    pub fn generate_code<I>(&self, kind: EntityKind, existing: I) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        self.generate_code_in(kind, existing, self.current_month())
    }

    /// Next code for `kind` in an explicit scope. Year-scoped kinds only use
    /// the year of `scope`.
    pub fn generate_code_in<I>(&self, kind: EntityKind, existing: I, scope: CodeMonth) -> String
    where
        I: IntoIterator,
        I::Item: Coded,
    {
        next_sequential_code(kind, scope, existing)
    }

    /// Non-sequential id for places with no existing records to scan.
    pub fn generate_unique_id(&self, prefix: &str) -> String {
        unique_id_at(prefix, self.clock.now())
    }
}

/// Derive the next code for `kind` in `scope` from previously issued codes.
///
/// Items without a code, codes from other scopes and codes that do not match
/// the kind's shape are ignored. A suffix of `u64::MAX` has no successor and
/// counts as malformed.
#[instrument(skip_all, fields(entity = %kind, scope = %scope))]
pub fn next_sequential_code<I>(kind: EntityKind, scope: CodeMonth, existing: I) -> String
where
    I: IntoIterator,
    I::Item: Coded,
{
    let scope_key = if kind.is_month_scoped() {
        scope.to_string()
    } else {
        format!("{:04}", scope.year())
    };
    let scope_prefix = format!("{}-{}-", kind.prefix(), scope_key);
    let pattern = pattern_for(kind);

    let mut matched = 0usize;
    let mut skipped = 0usize;
    let max_sequence = existing
        .into_iter()
        .filter_map(|item| {
            let code = item.code()?;
            if !code.starts_with(&scope_prefix) {
                return None;
            }
            match parse_sequence(pattern, code) {
                Some(sequence) => {
                    matched += 1;
                    Some(sequence)
                }
                None => {
                    skipped += 1;
                    debug!(code = %code, "Skipping malformed code");
                    None
                }
            }
        })
        .max();

    let next = max_sequence.map_or(1, |max| max + 1);
    let code = format!(
        "{}-{}-{:0width$}",
        kind.prefix(),
        scope_key,
        next,
        width = SEQUENCE_WIDTH
    );

    if skipped > 0 {
        MALFORMED_CODES_SKIPPED_TOTAL
            .with_label_values(&[kind.prefix()])
            .inc_by(skipped as f64);
    }
    CODES_GENERATED_TOTAL
        .with_label_values(&[kind.prefix()])
        .inc();

    debug!(matched, skipped, sequence = next, code = %code, "Generated code");

    code
}

// Only sequences that still have a successor.
fn parse_sequence(pattern: &Regex, code: &str) -> Option<u64> {
    let captures = pattern.captures(code)?;
    let sequence = captures.get(captures.len() - 1)?;
    sequence
        .as_str()
        .parse()
        .ok()
        .filter(|sequence| *sequence < u64::MAX)
}

/// Parse a code back into its kind, year, optional month and sequence.
///
/// Returns `None` for anything that is not a well-formed code of a known kind.
pub fn extract_code_info(code: &str) -> Option<CodeInfo> {
    CODE_PATTERNS.iter().find_map(|(kind, pattern)| {
        let captures = pattern.captures(code)?;
        let year: i32 = captures.get(1)?.as_str().parse().ok()?;

        if kind.is_month_scoped() {
            let month: u32 = captures.get(2)?.as_str().parse().ok()?;
            let month = CodeMonth::new(year, month)?.month();
            Some(CodeInfo {
                kind: *kind,
                year,
                month: Some(month),
                sequence: captures.get(3)?.as_str().parse().ok()?,
            })
        } else {
            Some(CodeInfo {
                kind: *kind,
                year,
                month: None,
                sequence: captures.get(2)?.as_str().parse().ok()?,
            })
        }
    })
}

/// `PREFIX-<unix millis>-<9 base36 chars>`, read from the system clock.
///
/// Collision-resistant but unordered; never use it where codes must sort.
pub fn generate_unique_id(prefix: &str) -> String {
    unique_id_at(prefix, SystemClock.now())
}

fn unique_id_at(prefix: &str, now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..UNIQUE_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}
