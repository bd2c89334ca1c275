//! Label lookup for the dashboard.
//!
//! Keys follow the `html.label.*` naming of the locale files. Lookup falls
//! back to English and then to the key itself.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Finnish,
    German,
}

impl Language {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => ENGLISH,
            Language::Finnish => FINNISH,
            Language::German => GERMAN,
        }
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("html.label.onlineActivity", "Online Activity"),
    ("html.label.servers", "Servers"),
    ("html.label.serverOverview", "Server Overview"),
    ("html.label.server", "Server"),
    ("html.label.samples", "Samples"),
    ("html.label.lastSeen", "Last sample"),
    ("html.label.peakPlayers", "Peak players"),
    ("html.label.latestPlayers", "Players online"),
    ("html.label.noData", "No data"),
    ("html.label.noServers", "No servers have reported data yet."),
    ("html.label.loadFailed", "Failed to load data"),
    ("html.label.players", "Players"),
    ("html.label.name", "Name"),
    ("html.label.activityIndex", "Activity Index"),
    ("html.label.activePlaytime", "Active Playtime"),
    ("html.label.sessions", "Sessions"),
    ("html.label.registered", "Registered"),
    ("html.label.lastSeenPlayer", "Last Seen"),
    ("html.label.geolocation", "Country"),
    ("html.label.banned", "Banned"),
    ("html.label.noPlayers", "No players have joined this server."),
    ("html.label.veryActive", "Very Active"),
    ("html.label.active", "Active"),
    ("html.label.regular", "Regular"),
    ("html.label.irregular", "Irregular"),
    ("html.label.inactive", "Inactive"),
    ("html.unit.secondsAgo", "{n}s ago"),
    ("html.unit.minutesAgo", "{n}m ago"),
    ("html.unit.hoursAgo", "{n}h ago"),
    ("html.unit.daysAgo", "{n}d ago"),
];

const FINNISH: &[(&str, &str)] = &[
    ("html.label.onlineActivity", "Online-aktiivisuus"),
    ("html.label.servers", "Palvelimet"),
    ("html.label.serverOverview", "Palvelimen yleiskatsaus"),
    ("html.label.server", "Palvelin"),
    ("html.label.samples", "Näytteet"),
    ("html.label.peakPlayers", "Pelaajahuippu"),
    ("html.label.latestPlayers", "Pelaajia paikalla"),
    ("html.label.noData", "Ei tietoja"),
    ("html.label.loadFailed", "Tietojen lataus epäonnistui"),
    ("html.label.players", "Pelaajat"),
    ("html.label.name", "Nimi"),
    ("html.label.activityIndex", "Aktiivisuusindeksi"),
    ("html.label.sessions", "Sessiot"),
    ("html.label.veryActive", "Erittäin aktiivinen"),
    ("html.label.active", "Aktiivinen"),
    ("html.label.regular", "Säännöllinen"),
    ("html.label.inactive", "Epäaktiivinen"),
    ("html.unit.secondsAgo", "{n} s sitten"),
    ("html.unit.minutesAgo", "{n} min sitten"),
    ("html.unit.hoursAgo", "{n} h sitten"),
    ("html.unit.daysAgo", "{n} pv sitten"),
];

const GERMAN: &[(&str, &str)] = &[
    ("html.label.onlineActivity", "Online-Aktivität"),
    ("html.label.servers", "Server"),
    ("html.label.serverOverview", "Serverübersicht"),
    ("html.label.server", "Server"),
    ("html.label.samples", "Messpunkte"),
    ("html.label.peakPlayers", "Spielerhöchststand"),
    ("html.label.latestPlayers", "Spieler online"),
    ("html.label.noData", "Keine Daten"),
    ("html.label.loadFailed", "Daten konnten nicht geladen werden"),
    ("html.label.players", "Spieler"),
    ("html.label.name", "Name"),
    ("html.label.activityIndex", "Aktivitätsindex"),
    ("html.label.activePlaytime", "Aktive Spielzeit"),
    ("html.label.sessions", "Sitzungen"),
    ("html.label.banned", "Gesperrt"),
    ("html.label.veryActive", "Sehr aktiv"),
    ("html.label.active", "Aktiv"),
    ("html.label.regular", "Regelmäßig"),
    ("html.label.irregular", "Unregelmäßig"),
    ("html.label.inactive", "Inaktiv"),
    ("html.unit.secondsAgo", "vor {n} s"),
    ("html.unit.minutesAgo", "vor {n} min"),
    ("html.unit.hoursAgo", "vor {n} h"),
    ("html.unit.daysAgo", "vor {n} T"),
];

/// Resolves label keys for one language. Passed explicitly to the cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t(&self, key: &str) -> String {
        lookup(self.language.table(), key)
            .or_else(|| lookup(ENGLISH, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Resolves `key` and substitutes `{n}` with `n`.
    pub fn count(&self, key: &str, n: i64) -> String {
        self.t(key).replace("{n}", &n.to_string())
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
