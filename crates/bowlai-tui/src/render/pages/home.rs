//! Marketing landing page

use bowlai_core::StatusTone;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::{Button, ButtonSize, ButtonVariant};

struct Feature {
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Easy Upload",
        desc: "Drag & drop videos for instant analysis",
    },
    Feature {
        title: "Real-time Analysis",
        desc: "Get results in under 60 seconds",
    },
    Feature {
        title: "Detailed Metrics",
        desc: "Comprehensive biomechanical data",
    },
    Feature {
        title: "Actionable Insights",
        desc: "AI-powered coaching recommendations",
    },
];

struct Step {
    title: &'static str,
    features: [&'static str; 3],
}

const STEPS: [Step; 3] = [
    Step {
        title: "Upload Video",
        features: ["HD video support", "Multiple formats", "Secure upload"],
    },
    Step {
        title: "AI Analysis",
        features: ["Joint detection", "Angle calculation", "ICC compliance check"],
    },
    Step {
        title: "Get Results",
        features: ["Detailed report", "Visual feedback", "Improvement tips"],
    },
];

const CTA_PERKS: [&str; 3] = ["No credit card required", "Free analysis", "Instant results"];

pub fn build(page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let check = theme.icons.check();

    // Hero
    page.blank();
    page.push(Line::from(vec![
        Span::styled(format!("{} ", check), styles::accent(p)),
        Span::styled(
            "ICC Compliant \u{2022} Trusted by 10,000+ Bowlers",
            styles::text_secondary(p),
        ),
    ]));
    page.blank();
    page.title("Analyze Your Bowling Action");
    page.push(Span::styled("Like Never Before", styles::heading(p)));
    page.blank();
    page.text(
        "Advanced AI-powered biomechanical analysis to perfect your technique, \
         ensure ICC compliance, and elevate your game to professional standards.",
        styles::text_secondary(p),
    );
    page.blank();

    let start = Button::new("Start Free Analysis", p)
        .size(ButtonSize::Lg)
        .icon("\u{2192}")
        .key_hint("s");
    let demo = Button::new("Watch Demo", p)
        .size(ButtonSize::Lg)
        .variant(ButtonVariant::Outline);
    let mut spans = start.spans();
    spans.push(Span::raw("  "));
    spans.extend(demo.spans());
    page.push(Line::from(spans));
    page.blank();

    // Floating stats of the hero preview
    page.push(Line::from(vec![
        Span::styled(
            format!("{} Status: Legal", check),
            styles::badge(p, StatusTone::Positive),
        ),
        Span::raw("   "),
        Span::styled("165.3\u{b0}", styles::heading(p)),
        Span::styled(" Elbow Angle", styles::text_muted(p)),
        Span::raw("   "),
        Span::styled("Accuracy ", styles::text_secondary(p)),
        Span::styled("95%", styles::heading(p)),
        Span::styled(" AI Confidence", styles::text_muted(p)),
    ]));

    // Features
    page.section("Powerful Features");
    page.text(
        "Everything you need for professional bowling analysis",
        styles::text_secondary(p),
    );
    for feature in &FEATURES {
        page.blank();
        page.push(Line::from(vec![
            Span::styled(format!("{} ", theme.icons.chevron_right()), styles::accent(p)),
            Span::styled(feature.title, styles::heading(p)),
        ]));
        page.bullet(" ", styles::text_muted(p), feature.desc, styles::text_muted(p));
    }

    // How it works
    page.section("How It Works");
    page.text("Three simple steps to perfect your action", styles::text_secondary(p));
    for (i, step) in STEPS.iter().enumerate() {
        page.blank();
        page.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), styles::focused_selected(p)),
            Span::raw(" "),
            Span::styled(step.title, styles::heading(p).add_modifier(Modifier::UNDERLINED)),
        ]));
        for feature in step.features {
            page.bullet(check, styles::accent(p), feature, styles::text_secondary(p));
        }
    }
    page.blank();
    let again = Button::new("Start Free Analysis", p)
        .size(ButtonSize::Lg)
        .key_hint("Enter");
    page.push(again.line().centered());

    // Call to action
    page.section("Ready to Perfect Your Bowling Action?");
    page.text(
        "Join thousands of bowlers using AI to improve their technique",
        styles::text_secondary(p),
    );
    page.blank();
    page.push(Button::new("Get Started Free", p).key_hint("s").line());
    page.blank();
    let mut perks = Vec::with_capacity(CTA_PERKS.len() * 3);
    for perk in CTA_PERKS {
        perks.push(Span::styled(format!("{} ", check), styles::accent(p)));
        perks.push(Span::styled(perk, styles::text_muted(p)));
        perks.push(Span::raw("   "));
    }
    page.push(Line::from(perks));
    page.blank();
}
