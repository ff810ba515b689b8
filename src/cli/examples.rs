use super::CliError;

/// Built-in phrases for `position` and `--all` runs.
pub const EXAMPLES: &[&str] = &[
    "Циферки — самое важное",
    "Я крайне разочарован",
    "Живи здесь сейчас",
    "Лови момент жизни",
    "Истина где-то между строк отчета",
    "Развлекаюсь, наблюдая за хаосом",
    "Мой сарказм — щит от реальности",
    "ааааа ббвбд гвггг зздзз",
    "Оптимизм давно вышел в отпуск",
    "Смех — мой скрытый протест",
    "Смешно? А мне нет",
    "Смешно тебе? А мне нет",
    "Смешно? Только если плакать",
    "Время лечит, но редко",
    "Смысл потерян в деталях",
    "Люди с голубыми глазами видят лучше слепых",
    "Эйнштейн не мог говорить до рождения",
    "Лошадь может дожить до конца своей жизни",
];

/// Resolves a 1-based position (negative counts from the end).
///
/// Returns the example's 1-based number together with the phrase.
pub fn select_example(position: i64) -> Result<(usize, &'static str), CliError> {
    let count = EXAMPLES.len();
    let not_found = CliError::ExampleNotFound { position, count };

    let index = match position {
        0 => return Err(not_found),
        p if p > 0 => p - 1,
        p => count as i64 + p,
    };

    usize::try_from(index)
        .ok()
        .and_then(|i| EXAMPLES.get(i).map(|phrase| (i + 1, *phrase)))
        .ok_or(not_found)
}
