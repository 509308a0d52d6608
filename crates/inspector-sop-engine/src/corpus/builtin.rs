//! Sections compiled into the binary. Mirrors `corpus/sop.toml`.

pub(super) const TITLE: &str = "Residential Home Inspection Standards of Practice";

pub(super) const SECTIONS: &[(&str, &str, &str)] = &[
    ("definitions", "Definitions and Scope", include_str!("../../corpus/definitions.txt")),
    (
        "limitations",
        "Limitations, Exceptions and Exclusions",
        include_str!("../../corpus/limitations.txt"),
    ),
    ("roof", "Roof", include_str!("../../corpus/roof.txt")),
    ("exterior", "Exterior", include_str!("../../corpus/exterior.txt")),
    (
        "foundation",
        "Basement, Foundation, Crawlspace and Structure",
        include_str!("../../corpus/foundation.txt"),
    ),
    ("heating", "Heating", include_str!("../../corpus/heating.txt")),
    ("cooling", "Cooling", include_str!("../../corpus/cooling.txt")),
    ("plumbing", "Plumbing", include_str!("../../corpus/plumbing.txt")),
    ("electrical", "Electrical", include_str!("../../corpus/electrical.txt")),
    ("fireplace", "Fireplace", include_str!("../../corpus/fireplace.txt")),
    ("attic", "Attic, Insulation and Ventilation", include_str!("../../corpus/attic.txt")),
    ("interior", "Doors, Windows and Interior", include_str!("../../corpus/interior.txt")),
    ("reporting", "Reporting", include_str!("../../corpus/reporting.txt")),
    ("glossary", "Glossary of Terms", include_str!("../../corpus/glossary.txt")),
];
