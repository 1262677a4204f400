//! Static copy for the onboarding carousel and the about page.

/// One slide of the onboarding carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name in the app's icon set.
    pub icon: &'static str,
    /// Accent color as a hex string.
    pub accent: &'static str,
}

/// The three onboarding slides, shown in order before the login gate.
pub const ONBOARDING_PAGES: [OnboardingPage; 3] = [
    OnboardingPage {
        title: "Discover Trends",
        description: "Explore the latest fashion and lifestyle trends curated just for you.",
        icon: "compass-outline",
        accent: "#6C63FF",
    },
    OnboardingPage {
        title: "Swift Delivery",
        description: "Experience lightning-fast shipping with real-time tracking updates.",
        icon: "flash-outline",
        accent: "#00B894",
    },
    OnboardingPage {
        title: "Secure Checkout",
        description: "Shop with confidence using our encrypted and secure payment options.",
        icon: "shield-checkmark-outline",
        accent: "#FF7675",
    },
];

/// One tappable contact row on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Everything the about page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutPage {
    pub developer: &'static str,
    pub role: &'static str,
    pub links: [ContactLink; 4],
    pub closing: &'static str,
    pub version: &'static str,
}

pub const ABOUT_PAGE: AboutPage = AboutPage {
    developer: "Iftikhar Zahid",
    role: "App Creator",
    links: [
        ContactLink {
            label: "Facebook",
            url: "https://facebook.com",
        },
        ContactLink {
            label: "IftikharXahid@gmail.com",
            url: "mailto:IftikharXahid@gmail.com",
        },
        ContactLink {
            label: "https://Zahid.codes",
            url: "https://Zahid.codes",
        },
        ContactLink {
            label: "+92 300 7971374",
            url: "tel:+923007971374",
        },
    ],
    closing: "Thank you for using this application",
    version: "1.0.0",
};
