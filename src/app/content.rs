//! All static page content. Every user-visible string lives here as a
//! bilingual record; sections render these tables and never own text of
//! their own.

use lazy_static::lazy_static;

use super::i18n::{Localized, LocalizedList, LocalizedText};
use super::SectionId;

// External links (fixed, opened in a new browsing context)
pub const EMAIL_URL: &str = "mailto:florianj.giraud@gmail.com";
pub const TEL_URL: &str = "tel:+33625606928";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jiro-jasmin/";
pub const GITHUB_URL: &str = "https://github.com/jiro-jasmin";

pub const EMAIL_DISPLAY: &str = "florianj.giraud@gmail.com";
pub const TEL_DISPLAY: &str = "+33 625 606 928";
pub const FULL_NAME: &str = "Florian J. Giraud";
pub const COPYRIGHT: &str = "Florian J. Giraud 2023";

// Navigation
pub struct NavItem {
    pub label: LocalizedText,
    pub target: SectionId,
}

pub static NAV_MENU: &[NavItem] = &[
    NavItem {
        label: Localized::new("技術", "Skills"),
        target: SectionId::Skills,
    },
    NavItem {
        label: Localized::new("プロフィール", "About"),
        target: SectionId::About,
    },
    NavItem {
        label: Localized::new("応募書類", "Resume"),
        target: SectionId::Resume,
    },
    NavItem {
        label: Localized::new("プロジェクト", "Projects"),
        target: SectionId::Projects,
    },
];

// The footer repeats the nav menu plus a contact entry
pub static FOOTER_MENU: &[NavItem] = &[
    NavItem {
        label: Localized::new("技術", "Skills"),
        target: SectionId::Skills,
    },
    NavItem {
        label: Localized::new("プロフィール", "About"),
        target: SectionId::About,
    },
    NavItem {
        label: Localized::new("応募書類", "Resume"),
        target: SectionId::Resume,
    },
    NavItem {
        label: Localized::new("プロジェクト", "Projects"),
        target: SectionId::Projects,
    },
    NavItem {
        label: Localized::new("お問い合わせ", "Contact"),
        target: SectionId::Contact,
    },
];

pub static BTN_CONTACT: LocalizedText = Localized::new("お問い合わせ", "Contact me");

// Home section
pub const HERO_NAME: &str = "JIRO JASMIN";

pub static HOME_JOB: LocalizedText = Localized::new("web開発", "web developer");

pub static HOME_DESCRIPTION: LocalizedList = Localized::new(
    &["26歳", "フランスのマルセイユ在住", "日本語、英語とフランス語可能"],
    &[
        "26 y.o",
        "Based in Marseille, France",
        "Available in English, French & Japanese",
    ],
);

pub static HOME_CATCH_PHRASE: LocalizedText = Localized::new(
    "🌏 人間の言語からプログラミング言語へ 💻\n国境を超えてユーザーを獲得するために、\nあなたのインパクトのある\nウェブアプリを制作します！",
    "🌏 From human language\nto programming language 💻\nI will create your next impactful web app to engage users across borders!",
);

// Skills section
pub static SKILLS_TITLE: LocalizedText = Localized::new("技術", "Skills");

pub struct Skill {
    pub name: &'static str,
    pub image_path: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "HTML & SCSS",
        image_path: "skills/90.png",
    },
    Skill {
        name: "JavaScript",
        image_path: "skills/80.png",
    },
    Skill {
        name: "TypeScript",
        image_path: "skills/60.png",
    },
    Skill {
        name: "React.js",
        image_path: "skills/60.png",
    },
    Skill {
        name: "Next.js",
        image_path: "skills/80.png",
    },
    Skill {
        name: "php",
        image_path: "skills/60.png",
    },
];

// About section
pub static ABOUT_TITLE: LocalizedText = Localized::new("プロフィール", "About me");

pub static ABOUT_BODY: LocalizedText = Localized::new(
    "はじめまして。ジロ・フロリアンと申します。\nフランス人のフロントエンドエンジニアでございます。\n現在フランスに在住しており、\nこの先挑戦心を持ちながら日本の国際的な企業でWebエンジニアとして貢献させて頂きたく存じます。\n大学での日本語の学習と、日本での職務経験があるため、\n日本語、英語、そして母語であるフランス語での対応が可能です。\nそれに加え、フリーランスでサイト制作の経験を積んでいたため、\n今後Web開発者のチームと共に働かせていただく準備ができております。\n採用頂けた後には、精一杯努めて参りますので、\nご検討のほど何卒よろしくお願い申し上げます。",
    "Hi 👋 I am Florian J. Giraud.\nI am a French junior web developer currently looking for a front-end developer position in an international company!\nAt the moment I am living in France but I am open to start working abroad 🌍\nMy background in Japanese studies and work experience in Japan has allowed me to be familiar with diverse teams using Japanese🇯🇵, English🇬🇧 and French🇫🇷 on a professional level.\nI can quickly adapt to change and I love learning new things everyday!",
);

pub const ABOUT_TECH_HEADING: &str = "Skills & Technologies";
pub const ABOUT_SOCIAL_HEADING: &str = "Social media";

pub struct TechIcon {
    pub name: &'static str,
    pub image_path: &'static str,
}

pub static ABOUT_TECH: &[TechIcon] = &[
    TechIcon {
        name: "HTML",
        image_path: "tech/html.png",
    },
    TechIcon {
        name: "Sass (SCSS)",
        image_path: "tech/sass.png",
    },
    TechIcon {
        name: "JavaScript",
        image_path: "tech/js.png",
    },
    TechIcon {
        name: "TypeScript",
        image_path: "tech/ts.png",
    },
    TechIcon {
        name: "React.js",
        image_path: "tech/react.png",
    },
    TechIcon {
        name: "Next.js",
        image_path: "tech/next.png",
    },
    TechIcon {
        name: "php",
        image_path: "tech/php.png",
    },
];

pub static ABOUT_STACK: &[&str] = &[
    "🚀 CSS: Sass (SCSS), PostCSS, BEM naming, Bootstrap, Tailwind",
    "🚀 JAM stack: React.js, Next.js, Strapi, TypeScript",
    "🚀 LAMP/MAMP stack: JavaScript, Php, Symfony, Kirby, Wordpress, SQL, Merise methodology",
    "🚀 Tools: Webpack, Parcel, jQuery",
    "🚀 Design: Photoshop, Indesign, Balsamiq, Figma",
    "🚀 Project management: Agile methodology, Scrum, Trello",
];

pub static BTN_READ_MORE: LocalizedText = Localized::new("続きを読む", "Read more");
pub static BTN_READ_LESS: LocalizedText = Localized::new("閉じる", "Close");

// Resume section
pub static RESUME_TITLE: LocalizedText = Localized::new("応募書類", "Resume");

pub static RESUME_MESSAGE: LocalizedText = Localized::new(
    "下記の書類のご検討のほど、よろしくお願いします。",
    "You can download my documents down below, in English and in Japanese.",
);

pub struct ResumeDoc {
    pub title: &'static str,
    pub doc_path: &'static str,
}

pub static RESUME_DOCS: &[ResumeDoc] = &[
    ResumeDoc {
        title: "Resume (English)",
        doc_path: "resume/pdf/FlorianGiraud-Resume.pdf",
    },
    ResumeDoc {
        title: "履歴書 (Japanese)",
        doc_path: "resume/pdf/ジロ・履歴書.pdf",
    },
    ResumeDoc {
        title: "職務経歴書 (Japanese)",
        doc_path: "resume/pdf/ジロ・職務経歴書.pdf",
    },
];

// Projects section
pub static PROJECTS_TITLE: LocalizedText = Localized::new("プロジェクト", "Projects");

pub static BTN_VIEW_MORE: LocalizedText = Localized::new("もっと見る", "View more");
pub static BTN_VIEW_LESS: LocalizedText = Localized::new("閉じる", "View less");

pub const BTN_GITHUB: &str = "Github";
pub const BTN_LIVE_DEMO: &str = "Live Demo";

/// How the detail view presents a project, in fixed precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMedia {
    /// An embedded video takes precedence over everything else.
    Video { video_id: &'static str },
    /// No video but a live demo: the preview image links to the demo.
    LinkedImage {
        image_path: &'static str,
        url: &'static str,
    },
    /// Plain preview image, no link.
    Image { image_path: &'static str },
}

pub struct ProjectCard {
    pub title: &'static str,
    pub image_path: &'static str,
    pub video_id: Option<&'static str>,
    pub description: LocalizedText,
    pub features: LocalizedText,
    pub tags: &'static [&'static str],
    pub repo_url: &'static str,
    pub live_demo: Option<&'static str>,
}

impl ProjectCard {
    /// Media for the detail view: video > live-demo-linked image > image.
    pub fn media(&self) -> ProjectMedia {
        if let Some(video_id) = self.video_id {
            ProjectMedia::Video { video_id }
        } else if let Some(url) = self.live_demo {
            ProjectMedia::LinkedImage {
                image_path: self.image_path,
                url,
            }
        } else {
            ProjectMedia::Image {
                image_path: self.image_path,
            }
        }
    }
}

lazy_static! {
    pub static ref PROJECTS: Vec<ProjectCard> = vec![
        ProjectCard {
            title: "Kanji Compass",
            image_path: "projects/kanji-compass.png",
            video_id: Some("j5-WIgR2ifk"),
            description: Localized::new(
                "間隔反復で漢字を学習できるウェブアプリ",
                "A kanji study app built around spaced repetition",
            ),
            features: Localized::new(
                "学習履歴に合わせて復習のタイミングを自動的に調整します。検索、手書き練習モード、進捗グラフ付き。JLPTのレベル別にリストを選択できます。",
                "Review timing adapts automatically to your study history. Includes search, a handwriting practice mode and progress charts. Vocabulary lists can be picked per JLPT level.",
            ),
            tags: &["react", "typescript"],
            repo_url: "https://github.com/jiro-jasmin/kanji-compass",
            live_demo: None,
        },
        ProjectCard {
            title: "Marché Marseille",
            image_path: "projects/marche.png",
            video_id: None,
            description: Localized::new(
                "マルセイユの市場を紹介する多言語サイト",
                "A multilingual guide to the markets of Marseille",
            ),
            features: Localized::new(
                "市場の営業日カレンダー、地図、出店者の紹介ページを備えています。フランス語、英語、日本語の3言語に対応しています。",
                "Features an opening-day calendar, a map and vendor profile pages. Available in French, English and Japanese.",
            ),
            tags: &["nextjs", "tailwind"],
            repo_url: "https://github.com/jiro-jasmin/marche-marseille",
            live_demo: Some("https://marche-marseille.vercel.app"),
        },
        ProjectCard {
            title: "Recette Box",
            image_path: "projects/recette-box.png",
            video_id: None,
            description: Localized::new(
                "家庭のレシピを整理・共有するアプリ",
                "An app to organize and share family recipes",
            ),
            features: Localized::new(
                "材料からのレシピ検索、買い物リストの自動作成、家族アカウントでの共有機能を実装しました。",
                "Implements search by ingredient, automatic shopping-list generation and sharing through family accounts.",
            ),
            tags: &["javascript", "php"],
            repo_url: "https://github.com/jiro-jasmin/recette-box",
            live_demo: None,
        },
        ProjectCard {
            title: "Atelier CMS",
            image_path: "projects/atelier-cms.png",
            video_id: None,
            description: Localized::new(
                "アーティスト向けの軽量CMS",
                "A lightweight CMS for artists",
            ),
            features: Localized::new(
                "ドラッグ＆ドロップのギャラリー編集と、マークダウンによる記事作成をサポートします。管理画面は完全にレスポンシブです。",
                "Supports drag-and-drop gallery editing and markdown articles. The admin panel is fully responsive.",
            ),
            tags: &["php", "symfony"],
            repo_url: "https://github.com/jiro-jasmin/atelier-cms",
            live_demo: Some("https://atelier-cms-demo.netlify.app"),
        },
        ProjectCard {
            title: "Météo Sud",
            image_path: "projects/meteo-sud.png",
            video_id: None,
            description: Localized::new(
                "南フランスの天気ダッシュボード",
                "A weather dashboard for the south of France",
            ),
            features: Localized::new(
                "一週間の予報、ミストラルの風速警報、ビーチごとの海水温を一画面にまとめて表示します。",
                "Shows the weekly forecast, mistral wind alerts and per-beach sea temperature on a single screen.",
            ),
            tags: &["javascript", "jquery"],
            repo_url: "https://github.com/jiro-jasmin/meteo-sud",
            live_demo: None,
        },
        ProjectCard {
            title: "Portfolio v1",
            image_path: "projects/portfolio-v1.png",
            video_id: None,
            description: Localized::new(
                "最初のポートフォリオサイト",
                "The first version of this portfolio",
            ),
            features: Localized::new(
                "SCSSとバニラJavaScriptだけで制作した静的サイトです。現行版の出発点になりました。",
                "A static site built with nothing but SCSS and vanilla JavaScript. It became the starting point for the current version.",
            ),
            tags: &["html", "scss"],
            repo_url: "https://github.com/jiro-jasmin/portfolio-v1",
            live_demo: Some("https://jiro-jasmin.github.io/portfolio-v1"),
        },
    ];
}

// Contact section
pub static CONTACT_TITLE: LocalizedText = Localized::new("お問い合わせ", "Contact");

pub static CONTACT_SUBTITLE: LocalizedText =
    Localized::new("ご連絡をお待ちしております！", "Drop me a message!");

pub static CONTACT_MESSAGE: LocalizedText = Localized::new(
    "カジュアル面談、プロジェクト計画や、\nこのポートフォリオのフィードバックのある場合など、\n是非ご連絡くださいますようお願い致します。\nご一緒にお仕事できる機会をお楽しみにしております。",
    "If you would like to have a casual chat, discuss any new project,\nor if you have any feedback on my current projects you would like to share,\nplease do not hesitate to reach me directly by email, telephone or on my social networks.\nI am looking forward to working with you!",
);

pub static CONTACT_LINKEDIN_NOTE: LocalizedText = Localized::new(
    "LinkedInでつながりましょう！",
    "Send me a message on LinkedIn!",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::i18n::Language;

    const BOTH: [Language; 2] = [Language::Japanese, Language::English];

    #[test]
    fn every_localized_string_is_non_empty_in_both_languages() {
        let texts = [
            &BTN_CONTACT,
            &HOME_JOB,
            &HOME_CATCH_PHRASE,
            &SKILLS_TITLE,
            &ABOUT_TITLE,
            &ABOUT_BODY,
            &BTN_READ_MORE,
            &BTN_READ_LESS,
            &RESUME_TITLE,
            &RESUME_MESSAGE,
            &PROJECTS_TITLE,
            &BTN_VIEW_MORE,
            &BTN_VIEW_LESS,
            &CONTACT_TITLE,
            &CONTACT_SUBTITLE,
            &CONTACT_MESSAGE,
            &CONTACT_LINKEDIN_NOTE,
        ];

        for text in texts {
            for lang in BOTH {
                assert!(!text.get(lang).is_empty());
            }
        }

        for lang in BOTH {
            let lines = HOME_DESCRIPTION.get(lang);
            assert!(!lines.is_empty());
            assert!(lines.iter().all(|line| !line.is_empty()));
        }
    }

    #[test]
    fn menus_are_labeled_in_both_languages() {
        for item in NAV_MENU.iter().chain(FOOTER_MENU.iter()) {
            for lang in BOTH {
                assert!(!item.label.get(lang).is_empty());
            }
        }
        // The footer adds a contact entry on top of the nav menu
        assert_eq!(FOOTER_MENU.len(), NAV_MENU.len() + 1);
        assert_eq!(FOOTER_MENU.last().unwrap().target, SectionId::Contact);
    }

    #[test]
    fn project_cards_are_well_formed() {
        assert!(!PROJECTS.is_empty());

        for card in PROJECTS.iter() {
            assert!(!card.title.is_empty());
            assert!(!card.image_path.is_empty());
            assert!(!card.tags.is_empty());
            assert!(!card.repo_url.is_empty());
            for lang in BOTH {
                assert!(!card.description.get(lang).is_empty());
                assert!(!card.features.get(lang).is_empty());
            }
        }
    }

    #[test]
    fn media_precedence_is_video_then_demo_then_image() {
        let video = ProjectCard {
            title: "v",
            image_path: "projects/v.png",
            video_id: Some("abc123"),
            description: Localized::new("説明", "desc"),
            features: Localized::new("機能", "features"),
            tags: &["t"],
            repo_url: "https://example.com/repo",
            live_demo: Some("https://example.com/demo"),
        };
        // A video wins even when a live demo is also present
        assert_eq!(video.media(), ProjectMedia::Video { video_id: "abc123" });

        let demo = ProjectCard {
            video_id: None,
            ..video
        };
        assert_eq!(
            demo.media(),
            ProjectMedia::LinkedImage {
                image_path: "projects/v.png",
                url: "https://example.com/demo",
            }
        );

        let plain = ProjectCard {
            video_id: None,
            live_demo: None,
            ..video
        };
        assert_eq!(
            plain.media(),
            ProjectMedia::Image {
                image_path: "projects/v.png",
            }
        );
    }

    #[test]
    fn dataset_exercises_every_media_branch() {
        let mut seen = [false; 3];
        for card in PROJECTS.iter() {
            match card.media() {
                ProjectMedia::Video { .. } => seen[0] = true,
                ProjectMedia::LinkedImage { .. } => seen[1] = true,
                ProjectMedia::Image { .. } => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}
