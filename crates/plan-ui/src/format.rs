//! Text formatting shared by the tables.

use crate::i18n::Translator;

/// Milliseconds since the epoch on the current target.
pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

/// "5m ago" style age of `thenMs`, or `-` when there is none.
/// Timestamps in the future read as zero seconds ago.
pub fn time_ago(translator: &Translator, thenMs: Option<i64>, nowMs: i64) -> String {
    let Some(then) = thenMs else {
        return "-".into();
    };
    let seconds = nowMs.saturating_sub(then).max(0) / 1000;
    match seconds {
        0..=59 => translator.count("html.unit.secondsAgo", seconds),
        60..=3599 => translator.count("html.unit.minutesAgo", seconds / 60),
        3600..=86399 => translator.count("html.unit.hoursAgo", seconds / 3600),
        _ => translator.count("html.unit.daysAgo", seconds / 86400),
    }
}

/// `1h 05m` style duration.
pub fn playtime(ms: i64) -> String {
    let minutes = ms.max(0) / 60_000;
    let hours = minutes / 60;
    if hours > 0 {
        format!("{hours}h {:02}m", minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn time_ago_is_relative() {
        let translator = Translator::default();
        assert_eq!(time_ago(&translator, None, 10_000), "-");
        assert_eq!(time_ago(&translator, Some(5_000), 10_000), "5s ago");
        assert_eq!(time_ago(&translator, Some(0), 120_000), "2m ago");
        assert_eq!(time_ago(&translator, Some(0), 7_200_000), "2h ago");
        assert_eq!(time_ago(&translator, Some(0), 172_800_000), "2d ago");
        assert_eq!(time_ago(&translator, Some(20_000), 10_000), "0s ago");
    }

    #[test]
    fn time_ago_is_translated() {
        let german = Translator::new(Language::German);
        assert_eq!(time_ago(&german, Some(0), 120_000), "vor 2 min");
        let finnish = Translator::new(Language::Finnish);
        assert_eq!(time_ago(&finnish, Some(0), 172_800_000), "2 pv sitten");
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let translator = Translator::default();
        assert_eq!(
            time_ago(&translator, Some(i64::MIN), i64::MAX),
            format!("{}d ago", i64::MAX / 1000 / 86400)
        );
        assert_eq!(time_ago(&translator, Some(i64::MAX), i64::MIN), "0s ago");
    }

    #[test]
    fn playtime_shows_hours_and_minutes() {
        assert_eq!(playtime(0), "0m");
        assert_eq!(playtime(59 * 60_000), "59m");
        assert_eq!(playtime(65 * 60_000), "1h 05m");
        assert_eq!(playtime(-5), "0m");
    }
}
