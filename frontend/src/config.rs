pub struct Config {
    pub school_name: &'static str,
    pub team_name: &'static str,
    pub join_url: &'static str,
    pub app_deep_link: &'static str,
    /// How long the splash overlay stays up before the page is revealed.
    pub splash_ms: u32,
    /// Delay before the open-in-app prompt appears on mobile browsers.
    pub open_in_app_delay_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            school_name: "МБОУ №71 города Казани",
            team_name: "Чилловые ребятки",
            join_url: "https://будьвдвижении.рф",
            app_deep_link: "web+dvizhenie71://open",
            splash_ms: 2_500,
            open_in_app_delay_ms: 5_000,
        }
    }
}

pub const CONFIG: Config = Config::new();
