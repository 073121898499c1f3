//! Porter stemming algorithm
//!
//! Classic five-step Porter stemmer operating on lowercase words. Rule tables
//! are static data; each call works on its own buffer so the stemmer is safe
//! to use from any number of threads at once.

/// Step 2 rewrites, applied when the remaining stem has measure > 0
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Step 3 rewrites, applied when the remaining stem has measure > 0
const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 removals, applied when the remaining stem has measure > 1
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Reduce a lowercase word to its Porter stem
///
/// Words of two characters or fewer are returned unchanged.
pub fn stem(word: &str) -> String {
    let mut stemmer = Stemmer::new(word);
    if stemmer.b.len() <= 2 {
        return word.to_string();
    }

    stemmer.step1ab();
    if stemmer.b.len() > 1 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }

    stemmer.b.into_iter().collect()
}

struct Stemmer {
    b: Vec<char>,
    /// Length of the stem left after the last successful `ends` match
    stem_len: usize,
}

impl Stemmer {
    fn new(word: &str) -> Self {
        let b: Vec<char> = word.chars().collect();
        let stem_len = b.len();
        Self { b, stem_len }
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in `b[..len]`, the `m` of `[C](VC)^m[V]`
    fn measure(&self, len: usize) -> usize {
        let mut n = 0;
        let mut i = 0;

        // Leading consonants
        while i < len && self.is_consonant(i) {
            i += 1;
        }

        loop {
            while i < len && !self.is_consonant(i) {
                i += 1;
            }
            if i >= len {
                return n;
            }
            while i < len && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
            if i >= len {
                return n;
            }
        }
    }

    fn vowel_in_stem(&self, len: usize) -> bool {
        (0..len).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is not w, x or y
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count();
        if len > self.b.len() {
            return false;
        }
        let start = self.b.len() - len;
        if !self.b[start..].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.stem_len = start;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.stem_len);
        self.b.extend(replacement.chars());
    }

    fn last(&self) -> usize {
        self.b.len() - 1
    }

    /// Plurals and -ed / -ing
    fn step1ab(&mut self) {
        if self.b[self.last()] == 's' {
            if self.ends("sses") {
                self.set_to("ss");
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.last() - 1] != 's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.measure(self.stem_len) > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem(self.stem_len) {
            self.b.truncate(self.stem_len);
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.last()) {
                if !matches!(self.b[self.last()], 'l' | 's' | 'z') {
                    self.b.pop();
                }
            } else if self.measure(self.b.len()) == 1 && self.cvc(self.last()) {
                self.b.push('e');
            }
        }
    }

    /// Terminal y to i when the stem holds a vowel
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem(self.stem_len) {
            let last = self.last();
            self.b[last] = 'i';
        }
    }

    fn step2(&mut self) {
        self.replace_first(STEP2_RULES);
    }

    fn step3(&mut self) {
        self.replace_first(STEP3_RULES);
    }

    /// Only the first matching suffix is considered, even when its measure check fails
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                if self.measure(self.stem_len) > 0 {
                    self.set_to(replacement);
                }
                return;
            }
        }
    }

    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            if !self.ends(suffix) {
                continue;
            }
            if *suffix == "ion" {
                let keeps_ion = self.stem_len == 0
                    || !matches!(self.b[self.stem_len - 1], 's' | 't');
                if keeps_ion {
                    return;
                }
            }
            if self.measure(self.stem_len) > 1 {
                self.b.truncate(self.stem_len);
            }
            return;
        }
    }

    /// Final -e and -ll cleanup
    fn step5(&mut self) {
        let last = self.last();
        if self.b[last] == 'e' {
            let m = self.measure(last);
            if m > 1 || (m == 1 && !self.cvc(last - 1)) {
                self.b.pop();
            }
        }

        let last = self.last();
        if self.b[last] == 'l' && self.double_consonant(last) && self.measure(self.b.len()) > 1 {
            self.b.pop();
        }
    }
}
