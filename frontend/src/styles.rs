pub const PAGE: &str = "bg-slate-50 min-h-screen text-slate-900";
pub const SECTION: &str = "container mx-auto px-6 py-12 max-w-5xl";
pub const SECTION_ALT: &str = "bg-white py-12";

pub const CARD: &str = "bg-white border border-slate-200 rounded-xl shadow-md p-6";
pub const CARD_HOVER: &str = "bg-white border border-slate-200 rounded-xl shadow-md p-6 transform transition-transform duration-200 hover:scale-105 hover:shadow-lg cursor-pointer";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SUCCESS: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_MUTED: &str = "bg-slate-400 hover:bg-slate-500 focus:outline-none";

pub const HEADING_LG: &str = "text-3xl md:text-4xl font-extrabold mb-4 text-center";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3";

pub const TEXT_MUTED: &str = "text-sm text-slate-500";
pub const ALERT_WARNING: &str = "p-4 rounded-lg shadow-md mb-6 bg-yellow-100 border border-yellow-300 text-yellow-800";
pub const ALERT_SUCCESS: &str = "p-4 rounded-lg shadow-md mb-6 bg-green-100 border border-green-300 text-green-800";

pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4";
pub const MODAL_PANEL: &str = "bg-white rounded-xl shadow-2xl max-w-2xl w-full max-h-[85vh] overflow-y-auto p-6";

pub const NAV: &str = "bg-white shadow-md fixed top-0 w-full z-40";
pub const NAV_LINK: &str = "text-base font-medium px-4 py-2 rounded-md transition-colors duration-200 text-slate-700 hover:text-blue-600";
pub const NAV_LINK_ACTIVE: &str = "text-blue-600 font-semibold";

pub const TALLY_BAR_TRACK: &str = "w-full bg-slate-200 rounded-full h-3";
pub const TALLY_BAR_FILL: &str = "bg-blue-600 h-3 rounded-full transition-all duration-300";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}
