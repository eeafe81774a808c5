//! Embedded sample words
//!
//! The fixed word/clue corpus inserted at startup. Words and clues are in
//! Indonesian.

/// Number of embedded sample pairs.
pub const SAMPLE_COUNT: usize = 10;

/// The (word, clue) pairs seeded into the store on every run.
pub const SAMPLE_WORDS: [(&str, &str); SAMPLE_COUNT] = [
    ("LEMARI", "Aku tempat menyimpan pakaian?"),
    ("KOMPUTER", "Alat elektronik untuk mengolah data"),
    ("JENDELA", "Pembuka ruangan untuk cahaya dan udara"),
    ("SEPEDA", "Kendaraan roda dua tanpa mesin"),
    ("TELEPON", "Alat komunikasi jarak jauh"),
    ("KAMERA", "Alat untuk mengambil gambar"),
    ("PENSIL", "Alat tulis dengan isi grafit"),
    ("PAYUNG", "Pelindung dari hujan atau panas"),
    ("GITAR", "Alat musik petik dengan enam senar"),
    ("KUNCI", "Alat untuk membuka atau mengunci pintu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_WORDS.len(), SAMPLE_COUNT);
    }

    #[test]
    fn samples_are_uppercase_words_with_clues() {
        for (word, clue) in SAMPLE_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "word '{word}' is not uppercase"
            );
            assert!(!clue.is_empty(), "word '{word}' has no clue");
        }
    }

    #[test]
    fn samples_have_no_duplicate_words() {
        let unique: std::collections::HashSet<_> =
            SAMPLE_WORDS.iter().map(|(word, _)| word).collect();
        assert_eq!(unique.len(), SAMPLE_COUNT);
    }
}
