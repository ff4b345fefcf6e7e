// src/i18n/mod.rs  —  Multi-language string tables
use crate::settings::Language;
use std::collections::HashMap;

/// One language's string table.
trait Table {
    fn try_get(&self, key: &str) -> Option<&'static str>;
    fn name(&self) -> &'static str;
}

/// All user-visible strings, keyed by text key and language.
/// Built once at startup and read-only afterwards.
pub struct Catalog {
    en: En,
    so: So,
    ar: Ar,
}

impl Catalog {
    pub fn new() -> Self {
        Self { en: En::new(), so: So::new(), ar: Ar::new() }
    }

    fn table(&self, lang: Language) -> &dyn Table {
        match lang {
            Language::English => &self.en,
            Language::Somali  => &self.so,
            Language::Arabic  => &self.ar,
        }
    }

    /// Lookup chain: exact (language, key) match → English → the key itself.
    /// A missing translation degrades to a visible placeholder, never an error.
    pub fn resolve<'a>(&self, key: &'a str, lang: Language) -> &'a str {
        self.table(lang)
            .try_get(key)
            .or_else(|| self.en.try_get(key))
            .unwrap_or(key)
    }

    /// Same chain from a raw language name; unrecognized names resolve
    /// against the English table.
    pub fn resolve_named<'a>(&self, key: &'a str, lang_name: &str) -> &'a str {
        self.resolve(key, Language::parse(lang_name).unwrap_or(Language::English))
    }

    /// Native display name of a language, for the settings page.
    pub fn language_name(&self, lang: Language) -> &'static str {
        self.table(lang).name()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// ── Helper macro ──────────────────────────────────────────────────────────────
macro_rules! lang_map {
    ($name:ident, $display:literal, [ $( $k:literal => $v:literal ),* $(,)? ]) => {
        struct $name(HashMap<&'static str, &'static str>);
        impl $name {
            fn new() -> Self {
                let mut m = HashMap::new();
                $( m.insert($k, $v); )*
                Self(m)
            }
        }
        impl Table for $name {
            fn try_get(&self, key: &str) -> Option<&'static str> {
                self.0.get(key).copied()
            }
            fn name(&self) -> &'static str { $display }
        }
    };
}

// ── English ───────────────────────────────────────────────────────────────────
lang_map!(En, "English", [
    "app_title"            => "EduScan Somalia",
    "app_subtitle"         => "Professional Learning Risk Assessment System",
    "dashboard"            => "Dashboard",
    "settings"             => "Settings",
    "system_overview"      => "System Overview",
    "total_students"       => "Total Students",
    "on_track"             => "On Track",
    "at_risk"              => "At Risk",
    "intervention"         => "Intervention Required",
    "academic_performance_by_subject" => "Academic Performance by Subject",
    "student_risk_distribution"       => "Student Risk Distribution",
    "recent_assessment_results"       => "Recent Assessment Results",
    "student_name"         => "Student Name",
    "grade"                => "Grade",
    "math_score"           => "Math Score",
    "reading_score"        => "Reading Score",
    "science_score"        => "Science Score",
    "risk_level"           => "Risk Level",
    "assessment_date"      => "Assessment Date",
    "language"             => "Language",
    "theme"                => "Theme",
    "offline_mode"         => "Offline Mode",
    "save_settings"        => "Save Settings",
    "reset_app"            => "Reset Application",
    "subjects"             => "Subjects",
    "average_score"        => "Average Score",
    "student_risk_overview"   => "Student Risk Overview",
    "average_subject_scores"  => "Average Subject Scores",
    "analytics"            => "Analytics",
    "status_online"        => "Online",
    "status_offline"       => "Offline",
    "settings_saved"       => "Settings saved successfully!",
    "settings_save_failed" => "Failed to save settings.",
    "app_reset"            => "Application reset successfully!",
]);

// ── Somali ────────────────────────────────────────────────────────────────────
lang_map!(So, "Soomaali", [
    "app_title"            => "EduScan Somalia",
    "app_subtitle"         => "Nidaamka Qiimaynta Khatarta Barashada ee Xirfadda leh",
    "dashboard"            => "Shabakada",
    "settings"             => "Dejinta",
    "system_overview"      => "Guud ahaan Nidaamka",
    "total_students"       => "Wadarta Ardayda",
    "on_track"             => "Jidka Saxda ah",
    "at_risk"              => "Halis ku jira",
    "intervention"         => "Waxaa loo baahan yahay faragelin",
    "academic_performance_by_subject" => "Waxqabadka Waxbarasho ee Maaddada",
    "student_risk_distribution"       => "Qaybinta Halista Ardayda",
    "recent_assessment_results"       => "Natiijooyinka Qiimaynta ee dhawaan",
    "student_name"         => "Magaca Ardayga",
    "grade"                => "Fasalka",
    "math_score"           => "Dhibcaha Xisaabta",
    "reading_score"        => "Dhibcaha Akhriska",
    "science_score"        => "Dhibcaha Sayniska",
    "risk_level"           => "Heerka Halista",
    "assessment_date"      => "Taariikhda Qiimaynta",
    "language"             => "Luuqada",
    "theme"                => "Qaabka",
    "offline_mode"         => "Qaabka aan internetka lahayn",
    "save_settings"        => "Kaydi Dejinta",
    "reset_app"            => "Dib u deji Codsiga",
    "subjects"             => "Maaddooyinka",
    "average_score"        => "Celceliska Dhibcaha",
    "student_risk_overview"   => "Guud ahaan Halista Ardayda",
    "average_subject_scores"  => "Celceliska Dhibcaha Maaddada",
    "analytics"            => "Falanqaynta",
    "status_online"        => "Xiriirsan",
    "status_offline"       => "Aan xiriirsanayn",
    "settings_saved"       => "Dejinta si guul leh ayaa loo keydiyay!",
    "settings_save_failed" => "Kaydinta dejinta waa fashilantay.",
    "app_reset"            => "Codsiga si guul leh ayaa dib loo dejiyay!",
]);

// ── Arabic ────────────────────────────────────────────────────────────────────
lang_map!(Ar, "العربية", [
    "app_title"            => "EduScan Somalia",
    "app_subtitle"         => "نظام تقييم مخاطر التعلم المهني",
    "dashboard"            => "لوحة التحكم",
    "settings"             => "الإعدادات",
    "system_overview"      => "نظرة عامة على النظام",
    "total_students"       => "إجمالي الطلاب",
    "on_track"             => "على المسار الصحيح",
    "at_risk"              => "في خطر",
    "intervention"         => "يتطلب تدخلاً",
    "academic_performance_by_subject" => "الأداء الأكاديمي حسب المادة",
    "student_risk_distribution"       => "توزيع مخاطر الطلاب",
    "recent_assessment_results"       => "نتائج التقييم الأخيرة",
    "student_name"         => "اسم الطالب",
    "grade"                => "الصف",
    "math_score"           => "درجة الرياضيات",
    "reading_score"        => "درجة القراءة",
    "science_score"        => "درجة العلوم",
    "risk_level"           => "مستوى الخطر",
    "assessment_date"      => "تاريخ التقييم",
    "language"             => "اللغة",
    "theme"                => "المظهر",
    "offline_mode"         => "الوضع غير المتصل",
    "save_settings"        => "حفظ الإعدادات",
    "reset_app"            => "إعادة تعيين التطبيق",
    "subjects"             => "المواد",
    "average_score"        => "متوسط الدرجة",
    "student_risk_overview"   => "نظرة عامة على مخاطر الطلاب",
    "average_subject_scores"  => "متوسط درجات المواد",
    "analytics"            => "التحليلات",
    "status_online"        => "متصل",
    "status_offline"       => "غير متصل",
    "settings_saved"       => "تم حفظ الإعدادات بنجاح!",
    "settings_save_failed" => "فشل حفظ الإعدادات.",
]);

// ── Tests ─────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_in_selected_language() {
        let cat = Catalog::new();
        assert_eq!(cat.resolve("at_risk", Language::Somali), "Halis ku jira");
        assert_eq!(cat.resolve("at_risk", Language::Arabic), "في خطر");
    }

    #[test]
    fn unrecognized_language_name_falls_back_to_english() {
        let cat = Catalog::new();
        assert_eq!(cat.resolve_named("at_risk", "Klingon"), "At Risk");
        assert_eq!(cat.resolve_named("at_risk", "Somali"), "Halis ku jira");
    }

    #[test]
    fn missing_key_echoes_the_key() {
        let cat = Catalog::new();
        assert_eq!(cat.resolve("nonexistent_key", Language::English), "nonexistent_key");
        assert_eq!(cat.resolve("nonexistent_key", Language::Arabic), "nonexistent_key");
    }

    #[test]
    fn untranslated_key_falls_back_to_english() {
        let cat = Catalog::new();
        // app_reset has no Arabic entry yet
        assert_eq!(cat.resolve("app_reset", Language::Arabic), "Application reset successfully!");
    }

    #[test]
    fn core_keys_exist_in_every_language() {
        let cat = Catalog::new();
        let keys = [
            "app_title", "app_subtitle", "dashboard", "settings",
            "total_students", "at_risk", "math_score", "risk_level",
            "language", "theme", "offline_mode", "status_online", "status_offline",
        ];
        for key in keys {
            for lang in Language::ALL {
                assert_ne!(cat.resolve(key, lang), key, "no entry for {key} in {lang:?}");
            }
        }
    }

    #[test]
    fn language_display_names() {
        let cat = Catalog::new();
        assert_eq!(cat.language_name(Language::English), "English");
        assert_eq!(cat.language_name(Language::Somali), "Soomaali");
        assert_eq!(cat.language_name(Language::Arabic), "العربية");
    }
}
