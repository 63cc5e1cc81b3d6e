use crate::layout::Layout;

pub const ENGLISH_KEYS: &str = "# S- T- K- P- W- H- R- A- O- * -E -U -F -R -P -B -L -G -T -S -D -Z";

pub const ENGLISH_NUMBERS: [(&str, &str); 10] = [
    ("S-", "1-"),
    ("T-", "2-"),
    ("P-", "3-"),
    ("H-", "4-"),
    ("A-", "5-"),
    ("O-", "0-"),
    ("-F", "-6"),
    ("-P", "-7"),
    ("-L", "-8"),
    ("-T", "-9"),
];

pub fn english() -> Layout {
    Layout::builder(ENGLISH_KEYS.split_whitespace())
        .implicit_hyphen_keys(["A-", "O-", "*", "-E", "-U"])
        .number_key("#")
        .numbers(ENGLISH_NUMBERS)
        .build()
        .unwrap()
}

/// Six-key layout without a number key.
pub fn small() -> Layout {
    Layout::builder(["S-", "T-", "K-", "-R", "-E", "-D"])
        .build()
        .unwrap()
}
