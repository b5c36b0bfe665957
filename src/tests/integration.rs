#[cfg(test)]
mod integration_tests {

    use crate::{
        NormalizeError, Normalizer, Stage, StageError, TextStats, WordsError, normalize,
        parse_to_words, to_persian_digits, to_words,
    };
    use std::borrow::Cow;

    #[test]
    fn production_pipeline_examples() {
        assert_eq!(normalize("\"نقل قول...\""), "«نقل قول…»");
        assert_eq!(normalize("كتاب ها"), "کتاب\u{200C}ها");
        assert_eq!(normalize("سلام    دنیا."), "سلام دنیا.");
        assert_eq!(normalize("خوب ترين ها"), "خوب\u{200C}ترین\u{200C}ها");
        assert_eq!(normalize("ای کاش أینطور نبود."), "ای کاش اینطور نبود.");
    }

    #[test]
    fn production_pipeline_mixed_document() {
        let input = "  متن عربي ،با فاصله    زیاد\r\n\r\n\r\nو \"نقل قول\" ...  ";
        assert_eq!(
            normalize(input),
            "متن عربی، با فاصله زیاد\n\nو «نقل قول»…"
        );
    }

    #[test]
    fn whitespace_around_joiner_collapses() {
        assert_eq!(normalize("کتاب ها"), "کتاب\u{200C}ها");
        assert_eq!(normalize("کتاب \u{200C} ها"), "کتاب\u{200C}ها");
    }

    #[test]
    fn numbers_for_display() {
        let year = 1404;
        let shown = format!("{} ({})", to_persian_digits(&year), to_words(year).unwrap());
        assert_eq!(shown, "۱۴۰۴ (یک هزار و چهارصد و چهار)");
        assert_eq!(parse_to_words("۱۴۰۴").unwrap(), "یک هزار و چهارصد و چهار");
    }

    #[test]
    fn words_errors_are_distinct() {
        assert!(matches!(parse_to_words("دو"), Err(WordsError::TypeMismatch { .. })));
        assert!(matches!(
            to_words(10i128.pow(21)),
            Err(WordsError::RangeExceeded { .. })
        ));
    }

    struct Forbid;

    impl Stage for Forbid {
        fn name(&self) -> &'static str {
            "forbid"
        }

        fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
            Ok(text.contains("ممنوع"))
        }

        fn apply<'a>(&self, _: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Validation("forbid", "forbidden word".into()))
        }
    }

    #[test]
    fn custom_stage_errors_surface_through_try_normalize() {
        let n = Normalizer::builder().add_stage(Forbid).build();
        assert_eq!(n.try_normalize("  مجاز  ").unwrap(), "مجاز");
        let err = n.try_normalize("کلمه ممنوع").unwrap_err();
        assert!(matches!(err, NormalizeError::Stage(StageError::Validation("forbid", _))));
        // the infallible form hands back the input
        assert_eq!(n.normalize(" کلمه ممنوع "), " کلمه ممنوع ");
    }

    #[test]
    fn stats_after_normalization() {
        let text = normalize("سلام ، دنیا .\r\n\r\n\r\nخوبی ؟");
        assert_eq!(text, "سلام، دنیا.\n\nخوبی؟");
        assert_eq!(
            TextStats::of(&text),
            TextStats {
                words: 3,
                sentences: 2,
                paragraphs: 2
            }
        );
    }
}
