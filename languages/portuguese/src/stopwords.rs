/// Portuguese function words and pronouns dropped from frequency counts
pub const STOP_WORDS: &[&str] = &[
    "a", "o", "e", "que", "de", "do", "da", "dos", "das", "em", "para", "por", "com", "não",
    "uma", "um", "como", "se", "mas", "ou", "ao", "aos", "à", "às", "os", "as", "isso", "este",
    "ele", "ela", "eles", "elas", "porque", "porém", "sua", "suas", "seu", "seus", "meu", "tu",
    "lhe", "lo", "nos", "na", "todos", "é", "são", "foi", "deu", "até",
];
