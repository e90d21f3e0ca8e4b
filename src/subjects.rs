use crate::models::Subject;

static SUBJECTS: [Subject; 9] = [
    Subject {
        id: "intro_comp",
        name: "Introdução à Computação",
        icon: "💻",
    },
    Subject {
        id: "prog1",
        name: "Fundamentos de Programação",
        icon: "👨‍💻",
    },
    Subject {
        id: "logica",
        name: "Lógica Matemática",
        icon: "🧠",
    },
    Subject {
        id: "matematica",
        name: "Matemática para Computação",
        icon: "📐",
    },
    Subject {
        id: "poo",
        name: "Programação Orientada a Objetos",
        icon: "📦",
    },
    Subject {
        id: "bd",
        name: "Banco de Dados",
        icon: "🗄️",
    },
    Subject {
        id: "redes",
        name: "Redes de Computadores",
        icon: "🌐",
    },
    Subject {
        id: "so",
        name: "Sistemas Operacionais",
        icon: "🖥️",
    },
    Subject {
        id: "seg_info",
        name: "Segurança da Informação",
        icon: "🔐",
    },
];

/// The catalog in declaration order.
pub fn list_subjects() -> &'static [Subject] {
    &SUBJECTS
}

pub fn find(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|subject| subject.id == id)
}

/// Display name used in prompts: catalog ids resolve to their name,
/// anything else is used as given.
pub fn display_name(subject: &str) -> &str {
    match find(subject) {
        Some(entry) => entry.name,
        None => subject,
    }
}
