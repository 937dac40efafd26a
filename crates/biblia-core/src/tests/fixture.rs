use crate::corpus::Corpus;
use crate::stopwords::StopWords;

/// Small corpus in the on-disk layout, byte-order mark included
pub const SAMPLE_JSON: &str = concat!(
    "\u{feff}",
    r#"[
  {
    "abbrev": "gn",
    "chapters": [
      [
        "No princípio Deus criou os céus e a terra.",
        "Era a terra sem forma e vazia; trevas cobriam a face do abismo, e o Espírito de Deus se movia sobre a face das águas.",
        "Disse Deus: \"Haja luz\", e houve luz.",
        "Deus viu que a luz era boa, e separou a luz das trevas."
      ],
      [
        "Assim foram concluídos os céus e a terra, e tudo o que neles há.",
        "No sétimo dia Deus já havia concluído a obra que realizara, e nesse dia descansou."
      ]
    ]
  },
  {
    "abbrev": "ex",
    "chapters": [
      ["Estes são os nomes dos filhos de Israel que entraram com Jacó no Egito, cada um com a sua família:"]
    ]
  },
  {
    "abbrev": "jó",
    "chapters": [["Na terra de Uz vivia um homem chamado Jó."]]
  },
  {
    "abbrev": "jo",
    "chapters": [["No princípio era aquele que é a Palavra."]]
  },
  {
    "abbrev": "vazio",
    "chapters": []
  }
]"#
);

pub fn sample_corpus() -> Corpus {
    Corpus::from_json(SAMPLE_JSON).unwrap()
}

pub fn sample_stop_words() -> StopWords {
    StopWords::from_list([
        "a", "o", "e", "que", "de", "do", "da", "dos", "das", "em", "no", "na", "os", "as", "se",
        "um", "é", "sua", "com",
    ])
}
