//! # Translations
//!
//! Static UI string tables for the 21 supported display languages.
//!
//! ## Lookup
//! ```text
//! translate(lang, key)
//!     │
//!     ├── key in lang's table?    → that string
//!     ├── key in English table?   → English string
//!     └── otherwise               → the key itself
//! ```
//!
//! English, Hindi and Bengali carry the full key set, Marathi a subset, and
//! the remaining languages the navigation labels only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// =============================================================================
// Languages
// =============================================================================

/// A display language. Serialized by its lowercase code (`"hindi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Marathi,
    Telugu,
    Tamil,
    Gujarati,
    Urdu,
    Kannada,
    Odia,
    Malayalam,
    Punjabi,
    Assamese,
    Maithili,
    Santali,
    Kashmiri,
    Nepali,
    Sindhi,
    Dogri,
    Manipuri,
    Bodo,
}

impl Language {
    /// Every language, in menu order.
    pub const ALL: [Language; 21] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Marathi,
        Language::Telugu,
        Language::Tamil,
        Language::Gujarati,
        Language::Urdu,
        Language::Kannada,
        Language::Odia,
        Language::Malayalam,
        Language::Punjabi,
        Language::Assamese,
        Language::Maithili,
        Language::Santali,
        Language::Kashmiri,
        Language::Nepali,
        Language::Sindhi,
        Language::Dogri,
        Language::Manipuri,
        Language::Bodo,
    ];

    /// Stable code, used in settings files and on the command line.
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Bengali => "bengali",
            Language::Marathi => "marathi",
            Language::Telugu => "telugu",
            Language::Tamil => "tamil",
            Language::Gujarati => "gujarati",
            Language::Urdu => "urdu",
            Language::Kannada => "kannada",
            Language::Odia => "odia",
            Language::Malayalam => "malayalam",
            Language::Punjabi => "punjabi",
            Language::Assamese => "assamese",
            Language::Maithili => "maithili",
            Language::Santali => "santali",
            Language::Kashmiri => "kashmiri",
            Language::Nepali => "nepali",
            Language::Sindhi => "sindhi",
            Language::Dogri => "dogri",
            Language::Manipuri => "manipuri",
            Language::Bodo => "bodo",
        }
    }

    /// English name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Gujarati => "Gujarati",
            Language::Urdu => "Urdu",
            Language::Kannada => "Kannada",
            Language::Odia => "Odia (Oriya)",
            Language::Malayalam => "Malayalam",
            Language::Punjabi => "Punjabi",
            Language::Assamese => "Assamese",
            Language::Maithili => "Maithili",
            Language::Santali => "Santali",
            Language::Kashmiri => "Kashmiri",
            Language::Nepali => "Nepali",
            Language::Sindhi => "Sindhi",
            Language::Dogri => "Dogri",
            Language::Manipuri => "Manipuri (Meitei)",
            Language::Bodo => "Bodo",
        }
    }

    /// Name of the language in its own script.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Bengali => "বাংলা",
            Language::Marathi => "मराठी",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
            Language::Gujarati => "ગુજરાતી",
            Language::Urdu => "اردو",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Odia => "ଓଡ଼ିଆ",
            Language::Malayalam => "മലയാളം",
            Language::Punjabi => "ਪੰਜਾਬੀ",
            Language::Assamese => "অসমীয়া",
            Language::Maithili => "मैथिली",
            Language::Santali => "ᱥᱟᱱᱛᱟᱲᱤ",
            Language::Kashmiri => "कॉशुर",
            Language::Nepali => "नेपाली",
            Language::Sindhi => "سنڌي",
            Language::Dogri => "डोगरी",
            Language::Manipuri => "মৈতৈলোন্",
            Language::Bodo => "बर'/बड़ो",
        }
    }

    /// `"Name (Native)"`, as shown in the language picker.
    pub fn display_name(self) -> String {
        format!("{} ({})", self.name(), self.native_name())
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => ENGLISH,
            Language::Hindi => HINDI,
            Language::Bengali => BENGALI,
            Language::Marathi => MARATHI,
            Language::Telugu => TELUGU,
            Language::Tamil => TAMIL,
            Language::Gujarati => GUJARATI,
            Language::Urdu => URDU,
            Language::Kannada => KANNADA,
            Language::Odia => ODIA,
            Language::Malayalam => MALAYALAM,
            Language::Punjabi => PUNJABI,
            Language::Assamese => ASSAMESE,
            Language::Maithili => MAITHILI,
            Language::Santali => SANTALI,
            Language::Kashmiri => KASHMIRI,
            Language::Nepali => NEPALI,
            Language::Sindhi => SINDHI,
            Language::Dogri => DOGRI,
            Language::Manipuri => MANIPURI,
            Language::Bodo => BODO,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or(UnknownLanguage(code))
    }
}

// =============================================================================
// Lookup
// =============================================================================

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translates a key, falling back to English and then to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language.table(), key)
        .or_else(|| lookup(ENGLISH, key))
        .unwrap_or(key)
}

/// Translates a key and substitutes `{{name}}` placeholders.
///
/// ```rust
/// use kirana_core::i18n::{translate_with, Language};
///
/// let text = translate_with(Language::English, "productsAddedSuccessfully", &[("count", "3")]);
/// assert_eq!(text, "3 products have been added successfully.");
/// ```
pub fn translate_with(language: Language, key: &str, vars: &[(&str, &str)]) -> String {
    vars.iter()
        .fold(translate(language, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
}

// =============================================================================
// Tables
// =============================================================================

const ENGLISH: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("billing", "Billing"),
    ("inventory", "Inventory"),
    ("reports", "Reports"),
    ("users", "User Management"),
    ("settings", "Settings"),
    ("totalSales", "Total Sales"),
    ("totalProducts", "Total Products"),
    ("lowStock", "Low Stock"),
    ("customers", "Customers"),
    ("recentTransactions", "Recent Transactions"),
    ("lowStockAlert", "Low Stock Alert"),
    ("salesOverview", "Sales Overview"),
    ("todaysSales", "Today's Sales"),
    ("totalTransactions", "Total Transactions"),
    ("lowStockItems", "Low Stock Items"),
    ("viewAllInventory", "View All Inventory"),
    ("leftInStock", "left"),
    ("noLowStockItems", "No low stock items found"),
    ("viewAllTransactions", "View All Transactions"),
    ("items", "items"),
    ("increase", "increase"),
    ("decrease", "decrease"),
    ("vsLastMonth", "vs last month"),
    ("createNewBill", "Create a new bill by adding products"),
    ("billGenerated", "Bill Generated"),
    ("successfullyCreatedBill", "Successfully created bill for"),
    ("inventoryManagement", "Inventory Management"),
    ("manageProducts", "Manage your products and stock levels"),
    ("scanBarcode", "Scan Barcode"),
    ("barcodeScanned", "Barcode scanned"),
    ("barcodeDetected", "Barcode {{barcode}} detected."),
    ("productsAddedToInventory", "Products added to inventory"),
    ("productsAddedSuccessfully", "{{count}} products have been added successfully."),
    ("reportsAnalytics", "Reports & Analytics"),
    ("trackPerformance", "Track your business performance"),
    ("userManagement", "User Management"),
    ("manageUsers", "Manage system users and access"),
    ("addUser", "Add User"),
    ("systemUsers", "System Users"),
    ("user", "User"),
    ("email", "Email"),
    ("role", "Role"),
    ("dateAdded", "Date Added"),
    ("actions", "Actions"),
    ("admin", "admin"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("add", "Add"),
    ("search", "Search"),
    ("storeInformation", "Store Information"),
    ("languageSettings", "Language Settings"),
    ("systemLanguage", "System Language"),
    ("currentLanguage", "Current language"),
    ("languageNote", "Language changes will be applied immediately to the interface. Some text elements may require a page refresh to fully update."),
    ("languageUpdated", "Language Updated"),
    ("languageChangedTo", "Display language changed to {{language}}."),
];

const HINDI: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("billing", "बिलिंग"),
    ("inventory", "इन्वेंटरी"),
    ("reports", "रिपोर्ट्स"),
    ("users", "उपयोगकर्ता प्रबंधन"),
    ("settings", "सेटिंग्स"),
    ("totalSales", "कुल बिक्री"),
    ("totalProducts", "कुल उत्पाद"),
    ("lowStock", "कम स्टॉक"),
    ("customers", "ग्राहक"),
    ("recentTransactions", "हाल के लेन-देन"),
    ("lowStockAlert", "कम स्टॉक अलर्ट"),
    ("salesOverview", "बिक्री अवलोकन"),
    ("todaysSales", "आज की बिक्री"),
    ("totalTransactions", "कुल लेन-देन"),
    ("lowStockItems", "कम स्टॉक आइटम"),
    ("viewAllInventory", "सभी इन्वेंटरी देखें"),
    ("leftInStock", "बचे हैं"),
    ("noLowStockItems", "कोई कम स्टॉक आइटम नहीं मिले"),
    ("viewAllTransactions", "सभी लेन-देन देखें"),
    ("items", "आइटम"),
    ("increase", "वृद्धि"),
    ("decrease", "कमी"),
    ("vsLastMonth", "पिछले महीने की तुलना में"),
    ("createNewBill", "उत्पादों को जोड़कर नया बिल बनाएं"),
    ("billGenerated", "बिल तैयार"),
    ("successfullyCreatedBill", "के लिए सफलतापूर्वक बिल बनाया गया"),
    ("inventoryManagement", "इन्वेंटरी प्रबंधन"),
    ("manageProducts", "अपने उत्पादों और स्टॉक स्तरों का प्रबंधन करें"),
    ("scanBarcode", "बारकोड स्कैन करें"),
    ("barcodeScanned", "बारकोड स्कैन किया गया"),
    ("barcodeDetected", "बारकोड {{barcode}} का पता चला।"),
    ("productsAddedToInventory", "उत्पाद इन्वेंटरी में जोड़े गए"),
    ("productsAddedSuccessfully", "{{count}} उत्पाद सफलतापूर्वक जोड़े गए हैं।"),
    ("reportsAnalytics", "रिपोर्ट और विश्लेषण"),
    ("trackPerformance", "अपने व्यापार के प्रदर्शन को ट्रैक करें"),
    ("userManagement", "उपयोगकर्ता प्रबंधन"),
    ("manageUsers", "सिस्टम उपयोगकर्ताओं और पहुंच का प्रबंधन करें"),
    ("addUser", "उपयोगकर्ता जोड़ें"),
    ("systemUsers", "सिस्टम उपयोगकर्ता"),
    ("user", "उपयोगकर्ता"),
    ("email", "ईमेल"),
    ("role", "भूमिका"),
    ("dateAdded", "जोड़ने की तारीख"),
    ("actions", "कार्य"),
    ("admin", "व्यवस्थापक"),
    ("save", "सेव करें"),
    ("cancel", "रद्द करें"),
    ("edit", "संपादित करें"),
    ("delete", "हटाएं"),
    ("add", "जोड़ें"),
    ("search", "खोजें"),
    ("storeInformation", "स्टोर की जानकारी"),
    ("languageSettings", "भाषा सेटिंग्स"),
    ("systemLanguage", "सिस्टम भाषा"),
    ("currentLanguage", "वर्तमान भाषा"),
    ("languageNote", "भाषा परिवर्तन तुरंत इंटरफेस पर लागू हो जाएंगे। कुछ टेक्स्ट तत्वों को पूरी तरह से अपडेट करने के लिए पेज रिफ्रेश की आवश्यकता हो सकती है।"),
];

const BENGALI: &[(&str, &str)] = &[
    ("dashboard", "ড্যাশবোর্ড"),
    ("billing", "বিলিং"),
    ("inventory", "ইনভেন্টরি"),
    ("reports", "রিপোর্ট"),
    ("users", "ব্যবহারকারী ব্যবস্থাপনা"),
    ("settings", "সেটিংস"),
    ("totalSales", "মোট বিক্রয়"),
    ("totalProducts", "মোট পণ্য"),
    ("lowStock", "কম স্টক"),
    ("customers", "গ্রাহক"),
    ("recentTransactions", "সাম্প্রতিক লেনদেন"),
    ("lowStockAlert", "কম স্টক সতর্কতা"),
    ("salesOverview", "বিক্রয় পর্যালোচনা"),
    ("todaysSales", "আজকের বিক্রয়"),
    ("totalTransactions", "মোট লেনদেন"),
    ("lowStockItems", "কম স্টক আইটেম"),
    ("viewAllInventory", "সমস্ত ইনভেন্টরি দেখুন"),
    ("leftInStock", "বাকি আছে"),
    ("noLowStockItems", "কোন কম স্টক আইটেম পাওয়া যায়নি"),
    ("viewAllTransactions", "সমস্ত লেনদেন দেখুন"),
    ("items", "আইটেম"),
    ("increase", "বৃদ্ধি"),
    ("decrease", "হ্রাস"),
    ("vsLastMonth", "গত মাসের তুলনায়"),
    ("createNewBill", "পণ্য যোগ করে নতুন বিল তৈরি করুন"),
    ("billGenerated", "বিল তৈরি হয়েছে"),
    ("successfullyCreatedBill", "এর জন্য সফলভাবে বিল তৈরি হয়েছে"),
    ("inventoryManagement", "ইনভেন্টরি ব্যবস্থাপনা"),
    ("manageProducts", "আপনার পণ্য এবং স্টক স্তর পরিচালনা করুন"),
    ("scanBarcode", "বারকোড স্ক্যান করুন"),
    ("barcodeScanned", "বারকোড স্ক্যান করা হয়েছে"),
    ("barcodeDetected", "বারকোড {{barcode}} সনাক্ত করা হয়েছে।"),
    ("productsAddedToInventory", "পণ্য ইনভেন্টরিতে যোগ করা হয়েছে"),
    ("productsAddedSuccessfully", "{{count}} পণ্য সফলভাবে যোগ করা হয়েছে।"),
    ("reportsAnalytics", "রিপোর্ট এবং বিশ্লেষণ"),
    ("trackPerformance", "আপনার ব্যবসার কর্মক্ষমতা ট্র্যাক করুন"),
    ("userManagement", "ব্যবহারকারী ব্যবস্থাপনা"),
    ("manageUsers", "সিস্টেম ব্যবহারকারী এবং অ্যাক্সেস পরিচালনা করুন"),
    ("addUser", "ব্যবহারকারী যোগ করুন"),
    ("systemUsers", "সিস্টেম ব্যবহারকারী"),
    ("user", "ব্যবহারকারী"),
    ("email", "ইমেইল"),
    ("role", "ভূমিকা"),
    ("dateAdded", "যোগ করার তারিখ"),
    ("actions", "কার্যক্রম"),
    ("admin", "প্রশাসক"),
    ("save", "সংরক্ষণ করুন"),
    ("cancel", "বাতিল"),
    ("edit", "সম্পাদনা"),
    ("delete", "মুছুন"),
    ("add", "যোগ করুন"),
    ("search", "অনুসন্ধান"),
    ("storeInformation", "দোকানের তথ্য"),
    ("languageSettings", "ভাষার সেটিংস"),
    ("systemLanguage", "সিস্টেম ভাষা"),
    ("currentLanguage", "বর্তমান ভাষা"),
    ("languageNote", "ভাষা পরিবর্তন অবিলম্বে ইন্টারফেসে প্রয়োগ করা হবে। সম্পূর্ণভাবে আপডেট করার জন্য কিছু টেক্সট উপাদানের জন্য পৃষ্ঠা রিফ্রেশ প্রয়োজন হতে পারে।"),
];

const MARATHI: &[(&str, &str)] = &[
    ("dashboard", "डॅशबोर्ड"),
    ("billing", "बिलिंग"),
    ("inventory", "इन्व्हेंटरी"),
    ("reports", "रिपोर्ट्स"),
    ("users", "वापरकर्ता व्यवस्थापन"),
    ("settings", "सेटिंग्ज"),
    ("totalSales", "एकूण विक्री"),
    ("totalProducts", "एकूण उत्पादने"),
    ("lowStock", "कमी स्टॉक"),
    ("customers", "ग्राहक"),
    ("save", "जतन करा"),
    ("cancel", "रद्द करा"),
    ("edit", "संपादित करा"),
    ("delete", "हटवा"),
    ("add", "जोडा"),
    ("search", "शोधा"),
    ("storeInformation", "स्टोअर माहिती"),
    ("languageSettings", "भाषा सेटिंग्ज"),
    ("systemLanguage", "सिस्टम भाषा"),
    ("currentLanguage", "सध्याची भाषा"),
    ("languageNote", "भाषा बदल तात्काळ इंटरफेसवर लागू होतील।"),
];

const TELUGU: &[(&str, &str)] = &[
    ("dashboard", "డాష్‌బోర్డ్"),
    ("billing", "బిల్లింగ్"),
    ("inventory", "ఇన్వెంటరీ"),
    ("reports", "రిపోర్ట్‌లు"),
    ("users", "వినియోగదారు నిర్వహణ"),
    ("settings", "సెట్టింగులు"),
];

const TAMIL: &[(&str, &str)] = &[
    ("dashboard", "டாஷ்போர்டு"),
    ("billing", "பில்லிங்"),
    ("inventory", "இன்வென்டரி"),
    ("reports", "அறிக்கைகள்"),
    ("users", "பயனர் மேலாண்மை"),
    ("settings", "அமைப்புகள்"),
];

const GUJARATI: &[(&str, &str)] = &[
    ("dashboard", "ડેશબોર્ડ"),
    ("billing", "બિલિંગ"),
    ("inventory", "ઇન્વેન્ટરી"),
    ("reports", "રિપોર્ટ્સ"),
    ("users", "વપરાશકર્તા વ્યવસ્થાપન"),
    ("settings", "સેટિંગ્સ"),
];

const URDU: &[(&str, &str)] = &[
    ("dashboard", "ڈیش بورڈ"),
    ("billing", "بلنگ"),
    ("inventory", "انوینٹری"),
    ("reports", "رپورٹس"),
    ("users", "صارف کا انتظام"),
    ("settings", "ترتیبات"),
];

const KANNADA: &[(&str, &str)] = &[
    ("dashboard", "ಡ್ಯಾಶ್‌ಬೋರ್ಡ್"),
    ("billing", "ಬಿಲ್ಲಿಂಗ್"),
    ("inventory", "ಇನ್ವೆಂಟರಿ"),
    ("reports", "ವರದಿಗಳು"),
    ("users", "ಬಳಕೆದಾರ ನಿರ್ವಹಣೆ"),
    ("settings", "ಸೆಟ್ಟಿಂಗ್‌ಗಳು"),
];

const ODIA: &[(&str, &str)] = &[
    ("dashboard", "ଡ୍ୟାସବୋର୍ଡ"),
    ("billing", "ବିଲିଂ"),
    ("inventory", "ଇନଭେଣ୍ଟରୀ"),
    ("reports", "ରିପୋର୍ଟଗୁଡିକ"),
    ("users", "ବ୍ୟବହାରକାରୀ ପରିଚାଳନା"),
    ("settings", "ସେଟିଂସମୂହ"),
];

const MALAYALAM: &[(&str, &str)] = &[
    ("dashboard", "ഡാഷ്ബോർഡ്"),
    ("billing", "ബില്ലിംഗ്"),
    ("inventory", "ഇൻവെന്ററി"),
    ("reports", "റിപ്പോർട്ടുകൾ"),
    ("users", "ഉപയോക്തൃ മാനേജ്‌മെന്റ്"),
    ("settings", "ക്രമീകരണങ്ങൾ"),
];

const PUNJABI: &[(&str, &str)] = &[
    ("dashboard", "ਡੈਸ਼ਬੋਰਡ"),
    ("billing", "ਬਿਲਿੰਗ"),
    ("inventory", "ਇਨਵੇਂਟਰੀ"),
    ("reports", "ਰਿਪੋਰਟਾਂ"),
    ("users", "ਉਪਭੋਗਤਾ ਪ੍ਰਬੰਧਨ"),
    ("settings", "ਸੈਟਿੰਗਾਂ"),
];

const ASSAMESE: &[(&str, &str)] = &[
    ("dashboard", "ডেছব'ৰ্ড"),
    ("billing", "বিলিং"),
    ("inventory", "ইনভেণ্ট'ৰী"),
    ("reports", "প্ৰতিবেদনসমূহ"),
    ("users", "ব্যৱহাৰকাৰী ব্যৱস্থাপনা"),
    ("settings", "ছেটিংছসমূহ"),
];

const MAITHILI: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("billing", "बिलिंग"),
    ("inventory", "इन्वेंटरी"),
    ("reports", "रिपोर्ट सभ"),
    ("users", "उपयोगकर्ता प्रबंधन"),
    ("settings", "सेटिंग सभ"),
];

const SANTALI: &[(&str, &str)] = &[
    ("dashboard", "ᱰᱮᱥᱵᱳᱨᱰ"),
    ("billing", "ᱵᱤᱞᱤᱝ"),
    ("inventory", "ᱤᱱᱵᱷᱮᱱᱴᱚᱨᱤ"),
    ("reports", "ᱨᱤᱯᱚᱨᱴᱠᱚ"),
    ("users", "ᱵᱮᱵᱷᱟᱨᱤᱭᱟᱹ ᱵᱮᱵᱚᱥᱛᱷᱟ"),
    ("settings", "ᱥᱮᱴᱤᱝᱠᱚ"),
];

const KASHMIRI: &[(&str, &str)] = &[
    ("dashboard", "ڈیش بورڈ"),
    ("billing", "بلنگ"),
    ("inventory", "انوینٹری"),
    ("reports", "رپورٹس"),
    ("users", "صارف کا انتظام"),
    ("settings", "ترتیبات"),
];

const NEPALI: &[(&str, &str)] = &[
    ("dashboard", "ड्यासबोर्ड"),
    ("billing", "बिलिङ"),
    ("inventory", "सूची"),
    ("reports", "प्रतिवेदनहरू"),
    ("users", "प्रयोगकर्ता व्यवस्थापन"),
    ("settings", "सेटिङहरू"),
];

const SINDHI: &[(&str, &str)] = &[
    ("dashboard", "ڊيش بورڊ"),
    ("billing", "بلنگ"),
    ("inventory", "انوينٽري"),
    ("reports", "رپورٽون"),
    ("users", "يوزر مئنيجمينٽ"),
    ("settings", "سيٽنگون"),
];

const DOGRI: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("billing", "बिलिंग"),
    ("inventory", "इन्वेंटरी"),
    ("reports", "रिपोर्ट्स"),
    ("users", "यूजर मैनेजमेंट"),
    ("settings", "सेटिंग्स"),
];

const MANIPURI: &[(&str, &str)] = &[
    ("dashboard", "ড্যাশবোর্ড"),
    ("billing", "বিলিং"),
    ("inventory", "ইনভেন্টরি"),
    ("reports", "রিপোর্ট"),
    ("users", "ইউজার ম্যানেজমেন্ট"),
    ("settings", "সেটিংস"),
];

const BODO: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("billing", "बिलिंग"),
    ("inventory", "इन्वेंटरी"),
    ("reports", "रिपोर्ट्स"),
    ("users", "यूजर मैनेजमेंट"),
    ("settings", "सेटिंग्स"),
];

// =============================================================================
// Unit Tests
// =============================================================================
