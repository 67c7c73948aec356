//! Static placeholder content for the sales page template. Swap the
//! bracketed placeholders for the real course copy before publishing.

pub struct Testimonial {
    pub name: &'static str,
    pub avatar: &'static str,
    pub headline: &'static str,
    pub content: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Nome do Aluno 1",
        avatar: "https://luisfelipedesigner.com/wp-content/uploads/Ray.webp",
        headline: "Alcancei meu [OBJETIVO] em 30 dias!",
        content: "Eu não acreditava que seria possível, mas seguindo o passo a passo do método, consegui resultados que nunca tive antes. O suporte é incrível!",
    },
    Testimonial {
        name: "Nome do Aluno 2",
        avatar: "https://luisfelipedesigner.com/wp-content/uploads/Sem-Titulo-3.webp",
        headline: "Melhor investimento do ano!",
        content: "O conteúdo é direto ao ponto e sem enrolação. Valeu cada centavo investido. Minha vida profissional mudou completamente após o curso.",
    },
    Testimonial {
        name: "Nome do Aluno 3",
        avatar: "https://luisfelipedesigner.com/wp-content/uploads/Kaiky-Design.webp",
        headline: "Finalmente entendi como fazer!",
        content: "Já tinha tentado de tudo antes, mas só aqui encontrei a clareza necessária para executar as tarefas com confiança e gerar lucro real.",
    },
];

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "🎯",
        title: "Foco Total em Resultados",
        description: "Ideal para quem busca alcançar o [OBJETIVO] sem perder tempo com teorias desnecessárias ou enrolação acadêmica.",
    },
    Benefit {
        icon: "⚡",
        title: "Implementação Acelerada",
        description: "Aprenda a metodologia exclusiva que permite que você saia da teoria para a prática lucrativa em tempo recorde.",
    },
    Benefit {
        icon: "🛡️",
        title: "Segurança e Suporte",
        description: "Suporte especializado diretamente com quem faz, garantindo que você nunca se sinta perdido na sua jornada.",
    },
    Benefit {
        icon: "🏆",
        title: "Autoridade e Reconhecimento",
        description: "Ao dominar o nosso método, você se destaca da massa e passa a ser visto como um expert de alto valor.",
    },
];

pub const WITHOUT_METHOD: &[&str] = &[
    "Prospecção aleatória e sem critérios.",
    "Dependência total de indicações de terceiros.",
    "Insegurança constante na hora de cobrar o preço justo.",
    "Ganhos instáveis e falta de previsibilidade financeira.",
    "Processos manuais que consomem todo o seu tempo livre.",
];

pub const WITH_METHOD: &[&str] = &[
    "Atração de clientes qualificados todos os dias.",
    "Scripts de prospecção e vendas validados e prontos.",
    "Posicionamento de autoridade que justifica preços altos.",
    "Previsibilidade de caixa e faturamento em crescimento.",
    "Fluxo de trabalho otimizado e focado no que importa.",
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Mapeamento Genético",
        description: "Analisamos cada detalhe do seu cenário atual para injetar inteligência onde a concorrência falha.",
        highlight: "Visão 360°",
    },
    ProcessStep {
        number: "02",
        title: "Engenharia de Oferta",
        description: "Construímos uma proposta impossível de ser ignorada, baseada no valor real que você entrega.",
        highlight: "Irresistibilidade",
    },
    ProcessStep {
        number: "03",
        title: "Tração de Escala",
        description: "Ativamos os canais de aquisição com foco total em ROI, trazendo os melhores clientes para sua mesa.",
        highlight: "Lucro Real",
    },
    ProcessStep {
        number: "04",
        title: "Domínio de Mercado",
        description: "Consolidação da autoridade para que você pare de brigar por preço e comece a ditar as regras.",
        highlight: "Autoridade Máxima",
    },
];

pub struct CourseModule {
    pub title: &'static str,
    pub image: &'static str,
}

pub const COURSE_MODULES: &[CourseModule] = &[
    CourseModule { title: "Módulo 01 - Introdução", image: "https://i.imgur.com/Y8c4DID.jpeg" },
    CourseModule { title: "Módulo 02 - Estratégia", image: "https://i.imgur.com/Y8c4DID.jpeg" },
    CourseModule { title: "Módulo 03 - Execução", image: "https://i.imgur.com/Y8c4DID.jpeg" },
    CourseModule { title: "Módulo 04 - Escala", image: "https://i.imgur.com/Y8c4DID.jpeg" },
    CourseModule { title: "Bônus - Mentoria", image: "https://i.imgur.com/Y8c4DID.jpeg" },
    CourseModule { title: "Módulo 05 - Ferramentas", image: "https://i.imgur.com/Y8c4DID.jpeg" },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Como vou receber meu acesso?",
        answer: "Imediatamente após a aprovação do pagamento, você receberá um e-mail automático com seu login e senha exclusivos.",
    },
    FaqEntry {
        question: "Por quanto tempo o curso será meu?",
        answer: "O seu acesso é [VITALÍCIO/ANUAL]. Você pode assistir às aulas quantas vezes quiser e no seu próprio ritmo.",
    },
    FaqEntry {
        question: "O curso tem certificado?",
        answer: "Sim! Ao completar 100% das aulas, você poderá emitir seu certificado de conclusão dentro da plataforma.",
    },
    FaqEntry {
        question: "Preciso de conhecimento prévio?",
        answer: "Não. O curso foi estruturado para levar você do absoluto zero até o nível avançado.",
    },
];
