//! Typed content blocks for the landing page, rendered into the Tera
//! context by the home route.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub form_title: String,
    pub form_subtitle: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Helping You Achieve Your Best Skin".to_string(),
            subheadline: "Connect with world-class dermatologists and trusted beauty brands"
                .to_string(),
            form_title: "Join Our Skincare Community".to_string(),
            form_subtitle: "Sign up to receive personalized skincare tips and exclusive offers."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub subtitle: String,
}

/// A numbered step in the "How It Works" section.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

impl Step {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A card in the "Why Afrigem?" section.
#[derive(Debug, Clone, Serialize)]
pub struct Reason {
    pub title: String,
    pub description: String,
}

impl Reason {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub quote: String,
    pub rating: u8,
}

impl Testimonial {
    fn new(name: &str, location: &str, quote: &str, rating: u8) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            quote: quote.to_string(),
            rating,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub headline: String,
    pub subheadline: String,
    pub button_text: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            headline: "Ready to Get Started?".to_string(),
            subheadline: "Discover the power of personalized skincare with Afrigem Beauty. \
                Sign up today for your free AI skin analysis and take the first step towards \
                achieving clear, radiant skin!"
                .to_string(),
            button_text: "Join Now".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub hero: HeroContent,
    pub mission: Section,
    pub mission_body: String,
    pub how_it_works: Section,
    pub steps: Vec<Step>,
    pub why_us: Section,
    pub reasons: Vec<Reason>,
    pub testimonials_header: Section,
    pub testimonials: Vec<Testimonial>,
    pub cta: CallToAction,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::default(),
            mission: Section {
                title: "Our Mission".to_string(),
                subtitle: "Simplifying Skincare for Everyone".to_string(),
            },
            mission_body: "At Afrigem, our mission is to simplify skincare by providing access \
                to professional dermatological advice and high-quality products tailored to \
                your skin's unique needs. We've created a platform that brings together expert \
                dermatologists and certified products, making skincare simple, effective, and \
                accessible."
                .to_string(),
            how_it_works: Section {
                title: "How It Works".to_string(),
                subtitle: "Your Journey to Healthier Skin".to_string(),
            },
            steps: vec![
                Step::new(
                    "AI Skin Analysis",
                    "Our AI-powered tool provides fast and accurate assessments of your skin \
                     condition. Simply upload a photo and let our advanced algorithm do the rest.",
                ),
                Step::new(
                    "Dermatologist Consultations",
                    "Receive expert advice from our network of experienced dermatologists \
                     based on your AI analysis.",
                ),
                Step::new(
                    "Curated Products",
                    "Our platform features a curated selection of dermatologist-approved \
                     skincare products tailored specifically for your skin type.",
                ),
                Step::new(
                    "Easy Online Shopping",
                    "Conveniently shop for the suggested products through our platform, all \
                     delivered directly to your door.",
                ),
            ],
            why_us: Section {
                title: "Why Afrigem?".to_string(),
                subtitle: "Making Skincare Personal".to_string(),
            },
            reasons: vec![
                Reason::new(
                    "Expert Advice at Your Fingertips",
                    "No need to wait for in-person appointments. With Afrigem, you can consult \
                     with a qualified dermatologist from the comfort of your home.",
                ),
                Reason::new(
                    "Trusted, Tailored Products",
                    "Our platform features products that have been specifically selected for \
                     your skin, ensuring they are effective for your unique skin type and \
                     climate.",
                ),
                Reason::new(
                    "Affordability and Accessibility",
                    "We offer affordable AI skin analysis and virtual consultations, so you \
                     can take control of your skincare routine without overspending.",
                ),
            ],
            testimonials_header: Section {
                title: "What Our Customers Say".to_string(),
                subtitle: "Real Results, Real Stories".to_string(),
            },
            testimonials: vec![
                Testimonial::new(
                    "Sarah Johnson",
                    "New York, USA",
                    "Afrigem completely transformed my skincare routine. The AI analysis was \
                     spot-on, and the dermatologist's advice helped clear my acne in just weeks!",
                    5,
                ),
                Testimonial::new(
                    "Michael Chen",
                    "Toronto, Canada",
                    "I've struggled with hyperpigmentation for years. The personalized product \
                     recommendations from Afrigem made a noticeable difference in just a month.",
                    5,
                ),
                Testimonial::new(
                    "Amara Okafor",
                    "Lagos, Nigeria",
                    "Finding products that work for my skin type in my climate was always a \
                     challenge. Afrigem connected me with a dermatologist who understood my \
                     needs perfectly.",
                    4,
                ),
            ],
            cta: CallToAction::default(),
        }
    }
}
