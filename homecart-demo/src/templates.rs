//! The system-template table and its seeding routine.
//!
//! System templates are shared starter lists: `is_system = true`, no
//! household, created by `"system"`, `sort_order` fixing their display
//! order. The whole set is written in one batched commit, keyed by id, so
//! re-seeding overwrites in place.

use crate::error::DemoResult;
use chrono::{DateTime, Utc};
use homecart_model::{collections, Template, TemplateItem};
use homecart_store::{BatchReport, BatchWriter, DocumentStore, WriteOp};

fn item(name: &str, category: &str, quantity: f64, unit: &str) -> TemplateItem {
    TemplateItem {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

fn template(
    id: &str,
    template_type: &str,
    name: &str,
    description: &str,
    icon: &str,
    sort_order: u32,
    now: DateTime<Utc>,
    default_items: Vec<TemplateItem>,
) -> Template {
    Template {
        id: id.to_string(),
        template_type: template_type.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        default_format: "shared".to_string(),
        default_items,
        is_system: true,
        created_by: "system".to_string(),
        household_id: None,
        created_date: now,
        updated_date: now,
        sort_order,
    }
}

/// The full set of system templates, stamped with one creation time.
pub fn system_templates(now: DateTime<Utc>) -> Vec<Template> {
    vec![
        template(
            "system_weekly_super",
            "supermarket",
            "סופרמרקט שבועי",
            "קניות שבועיות בסיסיות למשפחה",
            "🛒",
            1,
            now,
            vec![
                item("חלב 3% 1 ליטר", "חלבי", 2.0, "יחידות"),
                item("לחם פרוס", "לחמים ומאפים", 2.0, "יחידות"),
                item("ביצים", "חלבי", 1.0, "מארז"),
                item("גבינה צהובה", "חלבי", 1.0, "אריזה"),
                item("עגבניות", "פירות וירקות", 1.0, "ק\"ג"),
                item("מלפפונים", "פירות וירקות", 1.0, "ק\"ג"),
                item("תפוחים", "פירות וירקות", 1.0, "ק\"ג"),
                item("בננות", "פירות וירקות", 1.0, "קילו"),
                item("שמן זית", "שימורים", 1.0, "בקבוק"),
                item("אורז", "יבשים", 1.0, "קילו"),
                item("פסטה", "יבשים", 2.0, "אריזות"),
                item("רוטב עגבניות", "שימורים", 2.0, "יחידות"),
            ],
        ),
        template(
            "system_pharmacy",
            "pharmacy",
            "בית מרקחת - ערכת עזרה ראשונה",
            "פריטים בסיסיים לבית מרקחת",
            "💊",
            2,
            now,
            vec![
                item("אקמול/אקמוליות", "תרופות", 1.0, "אריזה"),
                item("נורופן/אדוויל", "תרופות", 1.0, "אריזה"),
                item("פלסטרים", "עזרה ראשונה", 1.0, "קופסה"),
                item("גזה סטרילית", "עזרה ראשונה", 1.0, "אריזה"),
                item("תחבושת אלסטית", "עזרה ראשונה", 1.0, "יחידה"),
                item("מדחום", "עזרה ראשונה", 1.0, "יחידה"),
                item("משכך כאבים לילדים", "תרופות", 1.0, "בקבוק"),
                item("ויטמין C", "תוספי תזונה", 1.0, "אריזה"),
                item("טיפות אוזניים", "תרופות", 1.0, "בקבוק"),
            ],
        ),
        template(
            "system_birthday_party",
            "event_birthday",
            "יום הולדת - מסיבה ביתית",
            "כל מה שצריך למסיבת יום הולדת מוצלחת",
            "🎂",
            3,
            now,
            vec![
                item("עוגת יום הולדת", "מאפים", 1.0, "יחידה"),
                item("נרות יום הולדת", "אירוח", 1.0, "חבילה"),
                item("בלונים צבעוניים", "קישוטים", 2.0, "חבילות"),
                item("צלחות חד פעמי", "אירוח", 1.0, "חבילה"),
                item("כוסות חד פעמי", "אירוח", 1.0, "חבילה"),
                item("מפיות נייר", "אירוח", 2.0, "חבילות"),
                item("שתייה קלה 1.5 ליטר", "משקאות", 3.0, "בקבוקים"),
                item("מיץ טבעי", "משקאות", 2.0, "בקבוקים"),
                item("חטיפים מלוחים", "חטיפים", 3.0, "שקיות"),
                item("סוכריות וממתקים", "חטיפים", 2.0, "שקיות"),
                item("פיצה קפואה", "מוקפא", 2.0, "יחידות"),
            ],
        ),
        template(
            "system_weekend_hosting",
            "hosting",
            "אירוח סוף שבוע",
            "רשימה לאירוח אורחים בסוף שבוע",
            "🍷",
            4,
            now,
            vec![
                item("בשר/עוף טרי", "בשר ועוף", 1.5, "ק\"ג"),
                item("ירקות לסלט", "פירות וירקות", 1.0, "מארז"),
                item("תפוחי אדמה", "פירות וירקות", 2.0, "ק\"ג"),
                item("חלות", "לחמים ומאפים", 2.0, "יחידות"),
                item("יין אדום/לבן", "אלכוהול", 2.0, "בקבוקים"),
                item("מיצים ושתייה קלה", "משקאות", 3.0, "בקבוקים"),
                item("גבינות מגוונות", "חלבי", 1.0, "מגש"),
                item("קינוחים", "מתוקים", 1.0, "מגש"),
                item("פירות העונה", "פירות וירקות", 2.0, "ק\"ג"),
                item("לחמניות/בגטים", "לחמים ומאפים", 1.0, "שקית"),
                item("חומוס", "סלטים", 1.0, "קופסה"),
                item("טחינה", "סלטים", 1.0, "צנצנת"),
            ],
        ),
        template(
            "system_game_night",
            "party",
            "ערב משחקים וצפייה",
            "חטיפים ושתייה לערב משחקים או צפייה",
            "🎮",
            5,
            now,
            vec![
                item("פופקורן", "חטיפים", 2.0, "שקיות"),
                item("צ'יפס/במבה", "חטיפים", 3.0, "שקיות"),
                item("ביסלי", "חטיפים", 2.0, "שקיות"),
                item("בוטנים/קשיו", "חטיפים", 1.0, "שקית"),
                item("שוקולדים", "מתוקים", 2.0, "חבילות"),
                item("שתייה קלה 1.5 ליטר", "משקאות", 3.0, "בקבוקים"),
                item("בירה", "אלכוהול", 6.0, "בקבוקים"),
                item("מיץ טבעי", "משקאות", 1.0, "בקבוק"),
                item("מים מינרליים", "משקאות", 2.0, "בקבוקים"),
                item("פיצה קפואה", "מוקפא", 2.0, "יחידות"),
            ],
        ),
        template(
            "system_camping",
            "picnic",
            "קמפינג/טיול",
            "פריטים לטיול או קמפינג משפחתי",
            "🏕️",
            6,
            now,
            vec![
                item("מים בקבוקים", "משקאות", 6.0, "בקבוקים"),
                item("לחם פרוס/לחמניות", "לחמים ומאפים", 2.0, "יחידות"),
                item("גבינה צהובה פרוסה", "חלבי", 1.0, "אריזה"),
                item("נקניקיות", "בשר ועוף", 1.0, "אריזה"),
                item("חטיפים מלוחים", "חטיפים", 3.0, "שקיות"),
                item("פירות העונה", "פירות וירקות", 2.0, "ק\"ג"),
                item("חטיפי אנרגיה", "חטיפים", 1.0, "קופסה"),
                item("קפה/תה נמס", "משקאות", 1.0, "שקית"),
                item("שוקולד מריר", "מתוקים", 2.0, "לוחות"),
                item("קרקרים", "חטיפים", 2.0, "אריזות"),
                item("חומוס", "סלטים", 1.0, "קופסה"),
                item("ירקות חתוכים", "פירות וירקות", 1.0, "מארז"),
            ],
        ),
        template(
            "system_shabbat_dinner",
            "hosting",
            "ארוחת שישי",
            "קניות לארוחת שבת משפחתית",
            "🕯️",
            7,
            now,
            vec![
                item("חלות", "לחמים ומאפים", 2.0, "יחידות"),
                item("עוף שלם", "בשר ועוף", 1.5, "ק\"ג"),
                item("תפוחי אדמה", "פירות וירקות", 2.0, "ק\"ג"),
                item("גזר", "פירות וירקות", 1.0, "ק\"ג"),
                item("בצל", "פירות וירקות", 1.0, "ק\"ג"),
                item("יין קידוש", "אלכוהול", 1.0, "בקבוק"),
                item("נרות שבת", "אירוח", 1.0, "חבילה"),
                item("חומוס", "סלטים", 2.0, "קופסאות"),
                item("סלטים קנויים", "סלטים", 3.0, "קופסאות"),
                item("עוגת שמרים", "מאפים", 1.0, "יחידה"),
            ],
        ),
        template(
            "system_passover",
            "holiday",
            "פסח - ליל הסדר",
            "קניות לליל הסדר ולשבוע החג",
            "🫓",
            8,
            now,
            vec![
                item("מצות", "לחמים ומאפים", 3.0, "אריזות"),
                item("יין אדום", "אלכוהול", 2.0, "בקבוקים"),
                item("ביצים", "חלבי", 2.0, "מארזים"),
                item("חריין", "שימורים", 1.0, "צנצנת"),
                item("מרור/חסה", "פירות וירקות", 1.0, "מארז"),
                item("תפוחים לחרוסת", "פירות וירקות", 1.0, "ק\"ג"),
                item("אגוזי מלך", "יבשים", 1.0, "שקית"),
                item("זרוע/עצם", "בשר ועוף", 1.0, "יחידה"),
                item("קמח מצה", "יבשים", 1.0, "אריזה"),
                item("דג לגפילטע", "בשר ועוף", 1.0, "ק\"ג"),
            ],
        ),
        template(
            "system_rosh_hashana",
            "holiday",
            "ראש השנה",
            "סימנים וקניות לערב החג",
            "🍎",
            9,
            now,
            vec![
                item("תפוחים", "פירות וירקות", 1.5, "ק\"ג"),
                item("דבש", "שימורים", 1.0, "צנצנת"),
                item("רימונים", "פירות וירקות", 2.0, "יחידות"),
                item("ראש דג", "בשר ועוף", 1.0, "יחידה"),
                item("תמרים", "פירות וירקות", 1.0, "אריזה"),
                item("חלה עגולה", "לחמים ומאפים", 2.0, "יחידות"),
                item("יין לקידוש", "אלכוהול", 1.0, "בקבוק"),
                item("עוגת דבש", "מאפים", 1.0, "יחידה"),
                item("גזר לצימעס", "פירות וירקות", 1.0, "ק\"ג"),
            ],
        ),
        template(
            "system_hanukkah",
            "holiday",
            "חנוכה",
            "סופגניות, לביבות וכל מה שמסביב",
            "🕎",
            10,
            now,
            vec![
                item("סופגניות", "מאפים", 8.0, "יחידות"),
                item("תפוחי אדמה ללביבות", "פירות וירקות", 2.0, "ק\"ג"),
                item("שמן לטיגון", "שימורים", 1.0, "בקבוק"),
                item("נרות חנוכה", "אירוח", 2.0, "חבילות"),
                item("שוקולד מטבעות", "מתוקים", 4.0, "שקיות"),
                item("ביצים", "חלבי", 1.0, "מארז"),
                item("קמח", "יבשים", 1.0, "ק\"ג"),
                item("סביבונים", "קישוטים", 1.0, "חבילה"),
            ],
        ),
        template(
            "system_school_lunches",
            "supermarket",
            "חזרה לבית הספר",
            "כריכים ונשנושים לכל השבוע",
            "🎒",
            11,
            now,
            vec![
                item("לחם פרוס", "לחמים ומאפים", 2.0, "יחידות"),
                item("ממרח שוקולד", "שימורים", 1.0, "צנצנת"),
                item("גבינה צהובה פרוסה", "חלבי", 1.0, "אריזה"),
                item("ירקות לכריכים", "פירות וירקות", 1.0, "מארז"),
                item("פירות קטנים", "פירות וירקות", 2.0, "ק\"ג"),
                item("חטיפי דגנים", "חטיפים", 2.0, "קופסאות"),
                item("בקבוקי מים קטנים", "משקאות", 1.0, "שישייה"),
                item("שקיות סנדוויץ'", "אירוח", 1.0, "חבילה"),
            ],
        ),
        template(
            "system_baby",
            "pharmacy",
            "ציוד לתינוק",
            "חיתולים, מזון והיגיינה לתינוק",
            "👶",
            12,
            now,
            vec![
                item("חיתולים", "היגיינה", 2.0, "חבילות"),
                item("מגבונים", "היגיינה", 4.0, "חבילות"),
                item("מטרנה/סימילק", "מזון תינוקות", 1.0, "קופסה"),
                item("מחית פירות", "מזון תינוקות", 6.0, "יחידות"),
                item("משחת החתלה", "תרופות", 1.0, "שפופרת"),
                item("שמפו לתינוק", "היגיינה", 1.0, "בקבוק"),
                item("דייסה", "מזון תינוקות", 2.0, "קופסאות"),
                item("מוצץ", "היגיינה", 1.0, "יחידה"),
                item("נורופן תינוקות", "תרופות", 1.0, "בקבוק"),
            ],
        ),
        template(
            "system_cleaning_day",
            "cleaning",
            "יום ניקיון גדול",
            "חומרי ניקוי לכל הבית",
            "🧼",
            13,
            now,
            vec![
                item("אקונומיקה", "ניקיון", 1.0, "בקבוק"),
                item("נוזל רצפות", "ניקיון", 1.0, "בקבוק"),
                item("נוזל כלים", "ניקיון", 2.0, "בקבוקים"),
                item("ספוגים", "ניקיון", 1.0, "חבילה"),
                item("מטליות מיקרופייבר", "ניקיון", 1.0, "חבילה"),
                item("שקיות אשפה", "ניקיון", 2.0, "גלילים"),
                item("מסיר אבנית", "ניקיון", 1.0, "בקבוק"),
                item("תרסיס חלונות", "ניקיון", 1.0, "בקבוק"),
                item("כפפות גומי", "ניקיון", 1.0, "זוג"),
            ],
        ),
        template(
            "system_bbq",
            "party",
            "על האש",
            "מנגל משפחתי בפארק או בגינה",
            "🍖",
            14,
            now,
            vec![
                item("כתף/אנטריקוט", "בשר ועוף", 1.5, "ק\"ג"),
                item("כנפיים", "בשר ועוף", 1.0, "ק\"ג"),
                item("קבב", "בשר ועוף", 1.0, "ק\"ג"),
                item("פיתות", "לחמים ומאפים", 2.0, "חבילות"),
                item("חומוס", "סלטים", 2.0, "קופסאות"),
                item("ירקות לשיפודים", "פירות וירקות", 1.0, "מארז"),
                item("פחמים", "אירוח", 1.0, "שק"),
                item("שתייה קלה", "משקאות", 4.0, "בקבוקים"),
                item("בירה", "אלכוהול", 6.0, "פחיות"),
                item("אבטיח", "פירות וירקות", 1.0, "יחידה"),
            ],
        ),
        template(
            "system_beach_day",
            "picnic",
            "יום ים",
            "צידנית ליום בחוף",
            "🏖️",
            15,
            now,
            vec![
                item("מים קרים", "משקאות", 6.0, "בקבוקים"),
                item("כריכים מוכנים", "לחמים ומאפים", 4.0, "יחידות"),
                item("אבטיח", "פירות וירקות", 1.0, "יחידה"),
                item("חטיפים", "חטיפים", 3.0, "שקיות"),
                item("ארטיקים", "מוקפא", 1.0, "מארז"),
                item("קרם הגנה", "היגיינה", 1.0, "בקבוק"),
                item("כוסות חד פעמי", "אירוח", 1.0, "חבילה"),
                item("ענבים", "פירות וירקות", 1.0, "ק\"ג"),
            ],
        ),
        template(
            "system_movie_night",
            "party",
            "ערב סרט לילדים",
            "פינוקים לערב סרט משפחתי",
            "🍿",
            16,
            now,
            vec![
                item("פופקורן", "חטיפים", 2.0, "שקיות"),
                item("שוקולד חלב", "מתוקים", 2.0, "חבילות"),
                item("גלידה", "מוקפא", 1.0, "אריזה"),
                item("סוכריות גומי", "מתוקים", 2.0, "שקיות"),
                item("שתייה קלה", "משקאות", 2.0, "בקבוקים"),
                item("מיץ תפוזים", "משקאות", 1.0, "בקבוק"),
                item("וופלים", "מתוקים", 1.0, "חבילה"),
            ],
        ),
        template(
            "system_healthy_week",
            "supermarket",
            "שבוע בריא",
            "ירקות, קטניות ומזון מלא לשבוע",
            "🥗",
            17,
            now,
            vec![
                item("קינואה", "יבשים", 1.0, "אריזה"),
                item("עדשים", "יבשים", 1.0, "שקית"),
                item("חזה עוף", "בשר ועוף", 1.0, "ק\"ג"),
                item("ברוקולי", "פירות וירקות", 2.0, "יחידות"),
                item("בטטה", "פירות וירקות", 1.0, "ק\"ג"),
                item("אבוקדו", "פירות וירקות", 3.0, "יחידות"),
                item("יוגורט יווני", "חלבי", 4.0, "יחידות"),
                item("שקדים", "יבשים", 1.0, "שקית"),
                item("לחם מלא", "לחמים ומאפים", 1.0, "יחידה"),
                item("טונה במים", "שימורים", 3.0, "קופסאות"),
            ],
        ),
        template(
            "system_baking_day",
            "supermarket",
            "יום אפייה",
            "חומרי גלם לעוגות ועוגיות",
            "🧁",
            18,
            now,
            vec![
                item("קמח לבן", "יבשים", 2.0, "ק\"ג"),
                item("סוכר", "יבשים", 1.0, "ק\"ג"),
                item("אבקת אפייה", "יבשים", 1.0, "אריזה"),
                item("סוכר וניל", "יבשים", 1.0, "אריזה"),
                item("ביצים", "חלבי", 1.0, "מארז"),
                item("חמאה", "חלבי", 2.0, "יחידות"),
                item("שוקולד צ'יפס", "מתוקים", 1.0, "שקית"),
                item("קקאו", "יבשים", 1.0, "אריזה"),
                item("שמנת מתוקה", "חלבי", 2.0, "יחידות"),
            ],
        ),
        template(
            "system_breakfast",
            "supermarket",
            "ארוחות בוקר לשבוע",
            "הכל לארוחת בוקר ישראלית",
            "🍳",
            19,
            now,
            vec![
                item("ביצים", "חלבי", 2.0, "מארזים"),
                item("גבינה לבנה", "חלבי", 2.0, "יחידות"),
                item("קוטג'", "חלבי", 2.0, "יחידות"),
                item("לחם כפרי", "לחמים ומאפים", 1.0, "יחידה"),
                item("עגבניות", "פירות וירקות", 1.0, "ק\"ג"),
                item("מלפפונים", "פירות וירקות", 1.0, "ק\"ג"),
                item("זיתים", "שימורים", 1.0, "צנצנת"),
                item("ריבה", "שימורים", 1.0, "צנצנת"),
            ],
        ),
        template(
            "system_office_kitchen",
            "office",
            "מטבחון משרד",
            "חידוש מלאי למטבחון הצוות",
            "☕",
            20,
            now,
            vec![
                item("קפה שחור/נמס", "משקאות", 2.0, "אריזות"),
                item("תה", "משקאות", 1.0, "קופסה"),
                item("סוכר ומלבינים", "יבשים", 1.0, "אריזה"),
                item("חלב", "חלבי", 4.0, "יחידות"),
                item("עוגיות", "מתוקים", 3.0, "אריזות"),
                item("כוסות חד פעמי", "אירוח", 2.0, "חבילות"),
                item("מגבות נייר", "ניקיון", 2.0, "גלילים"),
                item("נוזל כלים", "ניקיון", 1.0, "בקבוק"),
            ],
        ),
        template(
            "system_winter_stock",
            "supermarket",
            "התארגנות לחורף",
            "מלאי למזווה לימים קרים",
            "🧣",
            21,
            now,
            vec![
                item("מרק אינסטנט", "יבשים", 3.0, "אריזות"),
                item("עדשים למרק", "יבשים", 2.0, "שקיות"),
                item("שעועית יבשה", "יבשים", 1.0, "שקית"),
                item("שימורי עגבניות", "שימורים", 4.0, "קופסאות"),
                item("שימורי תירס", "שימורים", 3.0, "קופסאות"),
                item("תה צמחים", "משקאות", 2.0, "קופסאות"),
                item("דבש", "שימורים", 1.0, "צנצנת"),
                item("שוקו חם", "משקאות", 1.0, "אריזה"),
                item("פתיתים", "יבשים", 2.0, "אריזות"),
            ],
        ),
    ]
}

/// Writes the system templates in one batched commit, keyed by template id.
pub async fn seed_templates(
    store: &dyn DocumentStore,
    now: DateTime<Utc>,
) -> DemoResult<(Vec<Template>, BatchReport)> {
    let templates = system_templates(now);
    let writes = templates
        .iter()
        .map(|template| {
            Ok(WriteOp::set(
                collections::TEMPLATES,
                &template.id,
                serde_json::to_value(template)?,
            ))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let report = BatchWriter::new(store).write_all(writes).await?;
    Ok((templates, report))
}
