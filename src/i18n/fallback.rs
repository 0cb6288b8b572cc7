//! Hardcoded content fallbacks.
//!
//! The backend owns page content, but a freshly provisioned backend may
//! not have populated every slug yet. These blocks guarantee the
//! marketing pages always render something real in both languages.

use crate::models::{Bilingual, ContentPage};

/// Fallback content for a page slug, used when the backend answers 404
/// for it. Slugs without a fallback render the bilingual not-found view.
pub fn page(slug: &str) -> Option<ContentPage> {
    match slug {
        "about" => Some(ContentPage {
            slug: "about".to_string(),
            title: Bilingual {
                en: "About Us".to_string(),
                hi: "हमारे बारे में".to_string(),
            },
            body: Bilingual {
                en: "Jat Parivar is a social organisation devoted to the welfare, \
                     education and unity of the community. We connect families across \
                     villages and cities, support students and job seekers, and help \
                     members find suitable matches within the community."
                    .to_string(),
                hi: "जाट परिवार समाज के कल्याण, शिक्षा और एकता के लिए समर्पित एक सामाजिक \
                     संगठन है। हम गांवों और शहरों में फैले परिवारों को जोड़ते हैं, विद्यार्थियों \
                     और रोज़गार चाहने वालों की सहायता करते हैं, और समाज के भीतर उपयुक्त \
                     रिश्ते खोजने में सदस्यों की मदद करते हैं।"
                    .to_string(),
            },
        }),
        "history" => Some(ContentPage {
            slug: "history".to_string(),
            title: Bilingual {
                en: "Our History".to_string(),
                hi: "हमारा इतिहास".to_string(),
            },
            body: Bilingual {
                en: "The Parivar began as a small gathering of families who wanted to \
                     stay connected after moving away from their ancestral villages. \
                     Over the years it has grown into a registered organisation with \
                     members across the country, while keeping the same founding idea: \
                     no family of the community should ever stand alone."
                    .to_string(),
                hi: "परिवार की शुरुआत उन कुछ परिवारों की छोटी सी बैठक से हुई जो अपने \
                     पैतृक गांवों से दूर जाकर भी जुड़े रहना चाहते थे। वर्षों में यह देश भर \
                     में फैले सदस्यों वाला पंजीकृत संगठन बन गया, पर संस्थापक विचार वही \
                     रहा: समाज का कोई भी परिवार कभी अकेला न रहे।"
                    .to_string(),
            },
        }),
        _ => None,
    }
}
