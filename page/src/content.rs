//! Static copy for the sales page.
//!
//! All content is compile-time constant. Arrays are rendered one card per
//! entry, in array order.

use crate::components::IconKind;
use crate::types::{ComparisonColumn, ContentItem, PriceLine};

/// External checkout page shared by every call-to-action.
pub const CHECKOUT_URL: &str = "https://payfast.greenn.com.br/153513";

/// Brand name shown in the nav and footer.
pub const BRAND: &str = "Anamnese Cristã";

/// Author name used in the bio and copyright.
pub const AUTHOR: &str = "Tony Robert";

/// Product mockup shown in the hero.
pub const HERO_IMAGE_URL: &str = "https://tonyrobert.com.br/wp-content/uploads/2026/02/unnamed-1.jpg";

/// Author portrait.
pub const AUTHOR_IMAGE_URL: &str = "https://www.terapiacristatms.com.br/assets/tony-robert-CrFkOKSK.png";

/// Payment-provider trust badge under the offer button.
pub const SECURE_PAYMENT_BADGE_URL: &str =
    "https://tonyrobert.com.br/wp-content/uploads/2026/02/pagamento-seguro.png";

/// Main purchase call-to-action label.
pub const CTA_LABEL: &str = "Quero Garantir Minha Anamnese Cristã por R$17";

/// Document `<title>`.
pub const PAGE_TITLE: &str = "Anamnese Cristã | Modelo Pronto em PDF + Word";

/// Document `<meta name="description">`.
pub const META_DESCRIPTION: &str = "Modelo pronto de Anamnese Cristã em PDF + Word com perguntas estratégicas e prompt de IA para terapeutas e conselheiros.";

/// Questions the reader is likely asking themselves.
pub const PAIN_POINTS: [ContentItem; 6] = [
    ContentItem::headline(
        IconKind::XCircle,
        "Já travou durante um atendimento por não saber qual pergunta fazer em seguida?",
    ),
    ContentItem::headline(
        IconKind::XCircle,
        "Já perdeu tempo precioso tentando extrair informações que o paciente não solta?",
    ),
    ContentItem::headline(
        IconKind::XCircle,
        "Sente que as sessões ficam superficiais e não tocam na raiz do problema?",
    ),
    ContentItem::headline(
        IconKind::XCircle,
        "Tem dificuldade em integrar técnica profissional com valores cristãos de forma ética?",
    ),
    ContentItem::headline(
        IconKind::XCircle,
        "Perde horas tentando organizar as anotações do paciente sem um padrão?",
    ),
    ContentItem::headline(
        IconKind::XCircle,
        "Sente que o paciente sai da sessão sem um diagnóstico tangível e um plano de ação?",
    ),
];

/// What changes in the practice.
pub const BENEFITS: [ContentItem; 3] = [
    ContentItem::new(
        IconKind::Clock,
        "Roteiro Estruturado",
        "Um passo a passo lógico para conduzir a sessão do acolhimento ao fechamento sem esquecer nada importante.",
    ),
    ContentItem::new(
        IconKind::Bot,
        "Análise Profunda com IA",
        "Prompt pronto para usar no ChatGPT e extrair pontos cegos das respostas do paciente em segundos.",
    ),
    ContentItem::new(
        IconKind::Award,
        "Base Bíblica e Técnica",
        "Perguntas desenhadas para identificar feridas da alma enquanto mantém o alinhamento total com a fé cristã.",
    ),
];

/// Everything in the kit.
pub const DELIVERABLES: [ContentItem; 6] = [
    ContentItem::new(
        IconKind::FileText,
        "Ficha de Anamnese em PDF",
        "Modelo pronto para imprimir ou enviar para o seu paciente preencher online.",
    ),
    ContentItem::new(
        IconKind::BookOpen,
        "Arquivo Word Editável",
        "Personalize com sua logo, cores e dados profissionais.",
    ),
    ContentItem::new(
        IconKind::Bot,
        "Prompt Estratégico de IA",
        "Comando exclusivo para analisar respostas e identificar dores ocultas.",
    ),
    ContentItem::new(
        IconKind::Video,
        "Aula de Aplicação Prática",
        "Vídeo-aula ensinando como usar cada pergunta para extrair o melhor da terapia.",
    ),
    ContentItem::new(
        IconKind::ShieldCheck,
        "Masterclass: Integração com TCC",
        "Como conectar a anamnese cristã com a Terapia Cognitivo Comportamental.",
    ),
    ContentItem::new(
        IconKind::Users,
        "Guia de Consulta Rápida",
        "PDF complementar com dicas de ouro para facilitar seus estudos e sessões.",
    ),
];

/// List prices struck through in the offer panel.
pub const PRICE_ANCHORS: [PriceLine; 3] = [
    PriceLine {
        label: "Ficha de Anamnese Profissional",
        price: "R$ 67,00",
    },
    PriceLine {
        label: "Prompt de IA Estratégico",
        price: "R$ 47,00",
    },
    PriceLine {
        label: "Masterclass + Vídeo-aulas",
        price: "R$ 97,00",
    },
];

/// Sum of the anchors.
pub const PRICE_TOTAL: PriceLine = PriceLine {
    label: "VALOR TOTAL:",
    price: "R$ 211,00",
};

/// Offer price split for display: currency, whole part, cents.
pub const OFFER_PRICE: (&str, &str, &str) = ("R$", "17", ",00");

/// Guarantees listed under the price anchors.
pub const OFFER_PERKS: [&str; 3] = [
    "Acesso Vitalício ao Material",
    "Arquivo Word 100% Editável",
    "Garantia Incondicional de 7 Dias",
];

/// Left: the status quo. Right: the product.
pub const COMPARISON: [ComparisonColumn; 2] = [
    ComparisonColumn {
        label: "Continuar Improvisando",
        description: "Perdendo tempo, sentindo insegurança nos atendimentos e mantendo sessões superficiais.",
        recommended: false,
    },
    ComparisonColumn {
        label: "Conduzir com Estrutura",
        description: "Usar um método validado para aprofundar suas sessões e demonstrar excelência profissional.",
        recommended: true,
    },
];

/// Footer links. Targets are placeholders until the legal pages exist.
pub const FOOTER_LINKS: [(&str, &str); 3] = [("Termos", "#"), ("Privacidade", "#"), ("Suporte", "#")];
