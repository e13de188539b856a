//! Enum Fuzzer - Randomized invariant checking
//!
//! Builds many enums from a seeded generator and checks, for each:
//! - Every member is contained and indexable
//! - Parse agrees with the first occurrence of each value
//! - Custom equality finds members whose other fields differ
//! - Seeded selection is stable and in range
//! - Builder and direct construction agree
//! - Display keeps declaration order

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_core::{parse, Builder, Enum, Equaler, Member};
use tracing::{info, warn};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of enums to generate
    pub enum_count: usize,
    /// Upper bound on members per enum (inclusive)
    pub max_members: usize,
    /// Distinct values to draw from; smaller means more duplicates
    pub value_space: u32,
    /// Absent/present value probes per enum
    pub probes_per_enum: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            enum_count: 200,
            max_members: 32,
            value_space: 16,
            probes_per_enum: 16,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            enum_count: 25,
            max_members: 8,
            value_space: 4,
            probes_per_enum: 8,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            enum_count: 2000,
            max_members: 256,
            value_space: 64,
            probes_per_enum: 64,
            seed: 42,
        }
    }
}

/// Record identified by `code`; `label` is ignored by its equality
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coded {
    pub code: u32,
    pub label: u8,
}

impl Equaler for Coded {
    fn equal(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Coded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.code, self.label)
    }
}

/// Invariant failure found by the fuzzer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    NotContained { enum_no: usize, position: usize },
    WrongIndex { enum_no: usize, position: usize, index: Option<usize> },
    ParseMismatch { enum_no: usize, value: u32 },
    CustomParseMismatch { enum_no: usize, code: u32 },
    UnstableRandom { enum_no: usize, seed: u64 },
    BuilderMismatch { enum_no: usize },
    DisplayMismatch { enum_no: usize },
}

/// Fuzzing run summary
#[derive(Clone, Debug, Default)]
pub struct FuzzReport {
    pub enums_checked: usize,
    pub members_checked: usize,
    pub probes: usize,
    pub duplicates_seen: usize,
    pub empty_enums: usize,
    pub violations: Vec<Violation>,
}

impl FuzzReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Enum fuzzer
pub struct EnumFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
    report: FuzzReport,
}

impl EnumFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        EnumFuzzer {
            config,
            rng,
            report: FuzzReport::default(),
        }
    }

    /// Run every configured round and return the summary
    pub fn run(mut self) -> FuzzReport {
        info!(
            enums = self.config.enum_count,
            max_members = self.config.max_members,
            seed = self.config.seed,
            "starting enum fuzzing"
        );

        for enum_no in 0..self.config.enum_count {
            let values = self.generate_values();
            self.check_plain(enum_no, &values);
            self.check_coded(enum_no, &values);
            self.report.enums_checked += 1;
        }

        info!(
            enums = self.report.enums_checked,
            members = self.report.members_checked,
            violations = self.report.violations.len(),
            "enum fuzzing finished"
        );
        self.report
    }

    fn generate_values(&mut self) -> Vec<u32> {
        let len = self.rng.gen_range(0..=self.config.max_members);
        let space = self.config.value_space.max(1);
        (0..len).map(|_| self.rng.gen_range(0..space)).collect()
    }

    fn violation(&mut self, violation: Violation) {
        warn!(?violation, "enum invariant violated");
        self.report.violations.push(violation);
    }

    fn check_plain(&mut self, enum_no: usize, values: &[u32]) {
        let e: Enum<Member<u32>> = values.iter().copied().map(Member).collect();
        if e.is_empty() {
            self.report.empty_enums += 1;
        }

        for (position, member) in e.members().iter().enumerate() {
            self.report.members_checked += 1;
            let first = values.iter().position(|v| v == member.value());
            if first != Some(position) {
                self.report.duplicates_seen += 1;
            }
            if !e.contains(member) {
                self.violation(Violation::NotContained { enum_no, position });
            }
            let index = e.try_index(member).ok();
            if index.is_none() || index != first {
                self.violation(Violation::WrongIndex {
                    enum_no,
                    position,
                    index,
                });
            }
        }

        // Probe beyond the value space too, so misses are exercised
        let probe_space = self.config.value_space.max(1) * 2;
        for _ in 0..self.config.probes_per_enum {
            self.report.probes += 1;
            let value = self.rng.gen_range(0..probe_space);
            let expected = values.iter().position(|&v| v == value);
            let hashed = e.parse(&value).and_then(|m| e.position(m));
            let scanned = parse(&e, &value).and_then(|m| e.position(m));
            if hashed != expected || scanned != expected {
                self.violation(Violation::ParseMismatch { enum_no, value });
            }
        }

        let seed: u64 = self.rng.gen();
        let picked = e.random(seed).map(|m| m as *const Member<u32>);
        let again = e.random(seed).map(|m| m as *const Member<u32>);
        if picked != again || picked.is_none() != e.is_empty() {
            self.violation(Violation::UnstableRandom { enum_no, seed });
        }

        let mut builder = Builder::new();
        for &v in values {
            builder.add(Member(v));
        }
        if builder.build().members() != e.members() {
            self.violation(Violation::BuilderMismatch { enum_no });
        }

        let joined = values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if e.to_string() != joined {
            self.violation(Violation::DisplayMismatch { enum_no });
        }
    }

    fn check_coded(&mut self, enum_no: usize, codes: &[u32]) {
        let e: Enum<Member<Coded>> = codes
            .iter()
            .map(|&code| {
                Member(Coded {
                    code,
                    label: self.rng.gen(),
                })
            })
            .collect();

        for code in codes.iter().copied() {
            self.report.probes += 1;
            // A label no stored member carries
            let candidate = Coded { code, label: 0 };
            let found = parse(&e, &candidate).map(|m| m.value().code);
            let first = e.members().iter().find(|m| m.value().code == code);
            let consistent = match (found, first) {
                (Some(found), Some(first)) => {
                    found == code && e.position(&Member(candidate)) == e.position(first)
                }
                _ => false,
            };
            if !consistent {
                self.violation(Violation::CustomParseMismatch { enum_no, code });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_fuzzing_is_clean() {
        let report = EnumFuzzer::new(FuzzerConfig::light()).run();
        assert_eq!(report.enums_checked, 25);
        assert!(report.is_clean(), "violations: {:?}", report.violations);
    }

    #[test]
    fn test_default_fuzzing_is_clean() {
        let report = EnumFuzzer::new(FuzzerConfig::default()).run();
        println!("Fuzz report: {:?}", report);
        assert!(report.is_clean(), "violations: {:?}", report.violations);
        assert!(report.duplicates_seen > 0);
        assert!(report.probes > 0);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let a = EnumFuzzer::new(FuzzerConfig::light()).run();
        let b = EnumFuzzer::new(FuzzerConfig::light()).run();
        assert_eq!(a.members_checked, b.members_checked);
        assert_eq!(a.duplicates_seen, b.duplicates_seen);
        assert_eq!(a.empty_enums, b.empty_enums);
    }

    #[test]
    fn test_coded_equality_ignores_label() {
        let a = Coded { code: 7, label: 1 };
        let b = Coded { code: 7, label: 200 };
        assert!(a.equal(&b));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "7#1");
    }
}
