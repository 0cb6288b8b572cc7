//! Static UI string tables.
//!
//! Every user-facing label lives here, once per locale, so each page
//! resolves to a displayable string in both supported languages.

use super::Lang;

pub struct UiStrings {
    pub site_title: &'static str,
    pub tagline: &'static str,
    pub other_lang_label: &'static str,

    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_history: &'static str,
    pub nav_founders: &'static str,
    pub nav_management: &'static str,
    pub nav_news: &'static str,
    pub nav_jobs: &'static str,
    pub nav_institutions: &'static str,
    pub nav_matrimony: &'static str,
    pub nav_membership: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_login: &'static str,
    pub nav_logout: &'static str,
    pub nav_register: &'static str,

    pub latest_news: &'static str,
    pub read_more: &'static str,
    pub published_on: &'static str,
    pub no_items_yet: &'static str,

    pub error_retry: &'static str,
    pub page_not_found: &'static str,
    pub story_not_found: &'static str,
    pub back_to_news: &'static str,
    pub profile_not_found: &'static str,
    pub back_home: &'static str,

    pub phone: &'static str,
    pub password: &'static str,
    pub sign_in: &'static str,
    pub invalid_credentials: &'static str,
    pub login_heading: &'static str,

    pub register_heading: &'static str,
    pub full_name: &'static str,
    pub father_name: &'static str,
    pub village: &'static str,
    pub district: &'static str,
    pub save_and_continue: &'static str,
    pub name_and_phone_required: &'static str,

    pub send_interest: &'static str,
    pub interest_sent: &'static str,
    pub interest_failed: &'static str,
    pub accept: &'static str,
    pub accepted: &'static str,
    pub pending: &'static str,
    pub contact_after_accept: &'static str,
    pub interests_heading: &'static str,
    pub interests_received: &'static str,
    pub interests_sent: &'static str,
    pub gotra: &'static str,
    pub age: &'static str,
    pub education: &'static str,
    pub occupation: &'static str,

    pub membership_heading: &'static str,
    pub proceed_to_payment: &'static str,
    pub payment_failed: &'static str,
    pub complete_registration_first: &'static str,
    pub per_year: &'static str,

    pub dashboard_heading: &'static str,
    pub welcome: &'static str,
    pub referral_code: &'static str,
    pub membership_active: &'static str,

    pub designation: &'static str,
    pub contact: &'static str,
    pub location: &'static str,
    pub company: &'static str,
    pub category: &'static str,
}

static EN: UiStrings = UiStrings {
    site_title: "Jat Parivar",
    tagline: "A community of families, growing together",
    other_lang_label: "हिन्दी",

    nav_home: "Home",
    nav_about: "About Us",
    nav_history: "History",
    nav_founders: "Founders",
    nav_management: "Management",
    nav_news: "News",
    nav_jobs: "Jobs",
    nav_institutions: "Institutions",
    nav_matrimony: "Matrimony",
    nav_membership: "Membership",
    nav_dashboard: "Dashboard",
    nav_login: "Login",
    nav_logout: "Logout",
    nav_register: "Join Us",

    latest_news: "Latest News",
    read_more: "Read more",
    published_on: "Published",
    no_items_yet: "Nothing here yet. Please check back soon.",

    error_retry: "Something went wrong. Please try again.",
    page_not_found: "Page not found",
    story_not_found: "This story could not be found",
    back_to_news: "Back to all news",
    profile_not_found: "This profile could not be found",
    back_home: "Return home",

    phone: "Phone number",
    password: "Password",
    sign_in: "Sign In",
    invalid_credentials: "Invalid phone number or password",
    login_heading: "Member Login",

    register_heading: "Join the Parivar",
    full_name: "Full name",
    father_name: "Father's name",
    village: "Village",
    district: "District",
    save_and_continue: "Save and continue",
    name_and_phone_required: "Name and phone number are required",

    send_interest: "Express Interest",
    interest_sent: "Interest sent",
    interest_failed: "Could not send interest. Please try again.",
    accept: "Accept",
    accepted: "Accepted",
    pending: "Pending",
    contact_after_accept: "Contact details are shared after the interest is accepted.",
    interests_heading: "Matrimony Interests",
    interests_received: "Received",
    interests_sent: "Sent",
    gotra: "Gotra",
    age: "Age",
    education: "Education",
    occupation: "Occupation",

    membership_heading: "Choose a membership plan",
    proceed_to_payment: "Proceed to payment",
    payment_failed: "Payment could not be started. Please try again.",
    complete_registration_first: "Please complete the registration form first.",
    per_year: "per year",

    dashboard_heading: "Member Dashboard",
    welcome: "Welcome",
    referral_code: "Referral code",
    membership_active: "Membership active",

    designation: "Designation",
    contact: "Contact",
    location: "Location",
    company: "Company",
    category: "Category",
};

static HI: UiStrings = UiStrings {
    site_title: "जाट परिवार",
    tagline: "परिवारों का समाज, साथ-साथ आगे बढ़ता हुआ",
    other_lang_label: "English",

    nav_home: "मुखपृष्ठ",
    nav_about: "हमारे बारे में",
    nav_history: "इतिहास",
    nav_founders: "संस्थापक",
    nav_management: "प्रबंधन",
    nav_news: "समाचार",
    nav_jobs: "नौकरियां",
    nav_institutions: "संस्थाएं",
    nav_matrimony: "वैवाहिक",
    nav_membership: "सदस्यता",
    nav_dashboard: "डैशबोर्ड",
    nav_login: "लॉगिन",
    nav_logout: "लॉगआउट",
    nav_register: "जुड़ें",

    latest_news: "ताज़ा समाचार",
    read_more: "और पढ़ें",
    published_on: "प्रकाशित",
    no_items_yet: "अभी यहाँ कुछ नहीं है। कृपया बाद में देखें।",

    error_retry: "कुछ गलत हो गया। कृपया पुनः प्रयास करें।",
    page_not_found: "पृष्ठ नहीं मिला",
    story_not_found: "यह समाचार नहीं मिला",
    back_to_news: "सभी समाचारों पर वापस जाएं",
    profile_not_found: "यह प्रोफ़ाइल नहीं मिली",
    back_home: "मुखपृष्ठ पर लौटें",

    phone: "फ़ोन नंबर",
    password: "पासवर्ड",
    sign_in: "साइन इन करें",
    invalid_credentials: "अमान्य फ़ोन नंबर या पासवर्ड",
    login_heading: "सदस्य लॉगिन",

    register_heading: "परिवार से जुड़ें",
    full_name: "पूरा नाम",
    father_name: "पिता का नाम",
    village: "गांव",
    district: "जिला",
    save_and_continue: "सहेजें और आगे बढ़ें",
    name_and_phone_required: "नाम और फ़ोन नंबर आवश्यक हैं",

    send_interest: "रुचि भेजें",
    interest_sent: "रुचि भेजी गई",
    interest_failed: "रुचि नहीं भेजी जा सकी। कृपया पुनः प्रयास करें।",
    accept: "स्वीकार करें",
    accepted: "स्वीकृत",
    pending: "लंबित",
    contact_after_accept: "रुचि स्वीकार होने के बाद ही संपर्क विवरण साझा किया जाता है।",
    interests_heading: "वैवाहिक रुचियां",
    interests_received: "प्राप्त",
    interests_sent: "भेजी गई",
    gotra: "गोत्र",
    age: "आयु",
    education: "शिक्षा",
    occupation: "व्यवसाय",

    membership_heading: "सदस्यता योजना चुनें",
    proceed_to_payment: "भुगतान के लिए आगे बढ़ें",
    payment_failed: "भुगतान शुरू नहीं हो सका। कृपया पुनः प्रयास करें।",
    complete_registration_first: "कृपया पहले पंजीकरण फ़ॉर्म पूरा करें।",
    per_year: "प्रति वर्ष",

    dashboard_heading: "सदस्य डैशबोर्ड",
    welcome: "स्वागत है",
    referral_code: "रेफरल कोड",
    membership_active: "सदस्यता सक्रिय",

    designation: "पद",
    contact: "संपर्क",
    location: "स्थान",
    company: "संस्था",
    category: "श्रेणी",
};

/// UI string table for a locale.
pub fn ui(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::En => &EN,
        Lang::Hi => &HI,
    }
}
