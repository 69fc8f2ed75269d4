// relative risk thresholds, expressed as ratios so verdicts are decided on integer sums
/// Diagnostic groupings above `1/2` relative risk are "Increased risk".
pub const DIAGNOSTIC_SMALL_INCREASE_MAX: (u32, u32) = (1, 2);
/// Treatment groupings at or below `3/10` relative risk are "Low opportunity".
pub const TREATMENT_LOW_OPPORTUNITY_MAX: (u32, u32) = (3, 10);

// summary keys
pub const K_DIAGNOSTIC: &str = "diagnostic_score";
pub const K_TNF_TREATMENT: &str = "tnf_treatment_score";
pub const K_MTX_TREATMENT: &str = "mtx_treatment_score";

// treatment application labels
pub const V_TREATMENT_TNF_POS: &str = "Treatment_TNF-Inhibitor_Positive";
pub const V_TREATMENT_MTX_POS: &str = "Treatment_Methotrexate_Positive";

// neuropsychiatric disorders, used directly as application labels
pub const V_ASD: &str = "Autism Spectrum Disorder";
pub const V_TS: &str = "Tourettes Syndrome";
pub const V_BIP: &str = "Bipolar Disorder";
pub const V_SCZ: &str = "Schizophrenia";
pub const V_MDD: &str = "Major Depressive Disorder";
pub const V_ANO: &str = "Anorexia Nervosa";

// registry keys
pub const MTHFR_KEY: &str = "mthfr";
pub const SPONDYLOARTHRITIS_KEY: &str = "spondyloarthritis";
pub const NEUROPSYCH_KEY: &str = "neuropsych";
pub const DEFAULT_CONDITION: &str = SPONDYLOARTHRITIS_KEY;
