// src/generator.rs

use crate::model::{Difficulty, Explanation, OptionExplanation, ProtocolFact, Question, QuestionKind};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Distractores por pregunta de opción múltiple.
pub const DISTRACTORS: usize = 3;

/// Índices de la tabla que pueden usarse para la dificultad elegida.
pub fn pool_for(facts: &[ProtocolFact], difficulty: Difficulty, filter: bool) -> Vec<usize> {
    facts
        .iter()
        .enumerate()
        .filter(|(_, f)| !filter || f.difficulty <= difficulty)
        .map(|(i, _)| i)
        .collect()
}

/// Genera hasta `count` preguntas sin repetir protocolo.
/// Si se acaba el pool antes, devuelve las que haya.
pub fn generate_questions<R: Rng + ?Sized>(
    facts: &[ProtocolFact],
    difficulty: Difficulty,
    count: usize,
    filter_pool: bool,
    rng: &mut R,
) -> Vec<Question> {
    let mut available = pool_for(facts, difficulty, filter_pool);
    let mut questions = Vec::with_capacity(count.min(available.len()));

    while questions.len() < count && !available.is_empty() {
        let pick = rng.gen_range(0..available.len());
        let fact = &facts[available.swap_remove(pick)];

        let kind = *difficulty
            .question_kinds()
            .choose(rng)
            .unwrap_or(&QuestionKind::MultipleChoice);

        questions.push(build_question(facts, fact, kind, rng));
    }

    log::info!(
        "Generadas {} preguntas ({}, pedidas {})",
        questions.len(),
        difficulty.label(),
        count
    );
    questions
}

pub fn build_question<R: Rng + ?Sized>(
    facts: &[ProtocolFact],
    fact: &ProtocolFact,
    kind: QuestionKind,
    rng: &mut R,
) -> Question {
    match kind {
        QuestionKind::MultipleChoice => multiple_choice(facts, fact, rng),
        QuestionKind::PortLookup => free_text(
            kind,
            fact,
            format!("Which protocol uses port {}?", fact.port),
            fact.name.clone(),
            format!("{} uses port {}: {}", fact.name, fact.port, fact.description),
        ),
        QuestionKind::LayerLookup => free_text(
            kind,
            fact,
            format!("Which layer does {} operate on?", fact.name),
            fact.layer.clone(),
            format!("{} operates on the {} layer.", fact.name, fact.layer),
        ),
        QuestionKind::AcronymLookup => free_text(
            kind,
            fact,
            format!("What does the acronym {} stand for?", fact.name),
            fact.acronym.clone(),
            format!("{} stands for {}.", fact.name, fact.acronym),
        ),
        QuestionKind::TrueFalse => true_false(fact),
    }
}

fn multiple_choice<R: Rng + ?Sized>(
    facts: &[ProtocolFact],
    fact: &ProtocolFact,
    rng: &mut R,
) -> Question {
    // Nombres distintos del correcto (y sin duplicados)
    let mut seen = HashSet::new();
    seen.insert(fact.name.as_str());
    let others: Vec<&ProtocolFact> = facts
        .iter()
        .filter(|p| seen.insert(p.name.as_str()))
        .collect();

    let mut options: Vec<String> = others
        .choose_multiple(rng, DISTRACTORS)
        .map(|p| p.name.clone())
        .collect();
    options.push(fact.name.clone());
    options.shuffle(rng);

    let explanations = options
        .iter()
        .map(|opt| OptionExplanation {
            option: opt.clone(),
            text: facts
                .iter()
                .find(|p| &p.name == opt)
                .map(|p| p.description.clone())
                .unwrap_or_else(|| "No info".to_string()),
        })
        .collect();

    Question {
        kind: QuestionKind::MultipleChoice,
        fact_name: fact.name.clone(),
        prompt: format!(
            "Which protocol matches this description: '{}'?",
            fact.description
        ),
        answer: fact.name.clone(),
        options,
        explanation: Explanation::PerOption(explanations),
    }
}

fn free_text(
    kind: QuestionKind,
    fact: &ProtocolFact,
    prompt: String,
    answer: String,
    explanation: String,
) -> Question {
    Question {
        kind,
        fact_name: fact.name.clone(),
        prompt,
        answer,
        options: Vec::new(),
        explanation: Explanation::Single(explanation),
    }
}

fn true_false(fact: &ProtocolFact) -> Question {
    let (adjective, answer, explanation) = if fact.reliable {
        (
            "reliable",
            "True",
            format!("{} is reliable because it ensures delivery.", fact.name),
        )
    } else {
        (
            "unreliable",
            "False",
            format!(
                "{} is not reliable because it does not guarantee delivery.",
                fact.name
            ),
        )
    };

    Question {
        kind: QuestionKind::TrueFalse,
        fact_name: fact.name.clone(),
        prompt: format!("True or False: {} is {}.", fact.name, adjective),
        answer: answer.to_string(),
        options: vec!["True".to_string(), "False".to_string()],
        explanation: Explanation::Single(explanation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_protocols_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn facts() -> Vec<ProtocolFact> {
        read_protocols_embedded().expect("tabla embebida")
    }

    #[test]
    fn count_is_capped_by_request_and_pool() {
        let facts = facts();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_questions(&facts, Difficulty::Hard, 5, false, &mut rng).len(), 5);
        let all = generate_questions(&facts, Difficulty::Hard, 50, false, &mut rng);
        assert_eq!(all.len(), facts.len());
        assert!(generate_questions(&facts, Difficulty::Easy, 0, false, &mut rng).is_empty());
    }

    #[test]
    fn facts_never_repeat_within_a_quiz() {
        let facts = facts();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs = generate_questions(&facts, Difficulty::Medium, 20, false, &mut rng);
            let names: HashSet<_> = qs.iter().map(|q| q.fact_name.clone()).collect();
            assert_eq!(names.len(), qs.len());
        }
    }

    #[test]
    fn difficulty_controls_question_kinds() {
        let facts = facts();
        let mut rng = StdRng::seed_from_u64(42);
        for d in Difficulty::ALL {
            for q in generate_questions(&facts, d, 20, false, &mut rng) {
                assert!(d.question_kinds().contains(&q.kind), "{:?} en {:?}", q.kind, d);
            }
        }
    }

    #[test]
    fn choice_questions_contain_their_answer() {
        let facts = facts();
        let mut rng = StdRng::seed_from_u64(3);
        let qs = generate_questions(&facts, Difficulty::Easy, 20, false, &mut rng);
        for q in &qs {
            assert!(q.is_choice());
            assert!(q.options.contains(&q.answer));
            assert_eq!(q.options.len(), DISTRACTORS + 1);
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), q.options.len());
            match &q.explanation {
                Explanation::PerOption(list) => {
                    assert_eq!(list.len(), q.options.len());
                    for (opt, expl) in q.options.iter().zip(list) {
                        assert_eq!(&expl.option, opt);
                        let fact = facts.iter().find(|f| &f.name == opt).unwrap();
                        assert_eq!(expl.text, fact.description);
                    }
                }
                other => panic!("explicación inesperada: {other:?}"),
            }
        }
    }

    #[test]
    fn templates_render_fact_fields() {
        let facts = facts();
        let bgp = facts.iter().find(|f| f.name == "BGP").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let port = build_question(&facts, bgp, QuestionKind::PortLookup, &mut rng);
        assert_eq!(port.prompt, "Which protocol uses port 179?");
        assert_eq!(port.answer, "BGP");

        let layer = build_question(&facts, bgp, QuestionKind::LayerLookup, &mut rng);
        assert_eq!(layer.answer, "Network");
        assert_eq!(
            layer.explanation,
            Explanation::Single("BGP operates on the Network layer.".into())
        );

        let acronym = build_question(&facts, bgp, QuestionKind::AcronymLookup, &mut rng);
        assert_eq!(acronym.answer, "Border Gateway Protocol");

        let tf = build_question(&facts, bgp, QuestionKind::TrueFalse, &mut rng);
        assert_eq!(tf.prompt, "True or False: BGP is reliable.");
        assert_eq!(tf.answer, "True");
        assert!(tf.options.contains(&tf.answer));

        let udp = facts.iter().find(|f| f.name == "UDP").unwrap();
        let tf = build_question(&facts, udp, QuestionKind::TrueFalse, &mut rng);
        assert_eq!(tf.prompt, "True or False: UDP is unreliable.");
        assert_eq!(tf.answer, "False");
    }

    #[test]
    fn multiple_choice_with_tiny_table_uses_what_exists() {
        let facts: Vec<ProtocolFact> = facts().into_iter().take(2).collect();
        let mut rng = StdRng::seed_from_u64(9);
        let q = build_question(&facts, &facts[0], QuestionKind::MultipleChoice, &mut rng);
        assert_eq!(q.options.len(), 2);
        assert!(q.options.contains(&q.answer));
    }

    #[test]
    fn difficulty_filter_restricts_pool() {
        let facts = facts();
        let easy = pool_for(&facts, Difficulty::Easy, true);
        assert!(easy.iter().all(|&i| facts[i].difficulty == Difficulty::Easy));
        assert!(easy.len() < facts.len());
        assert_eq!(pool_for(&facts, Difficulty::Hard, true).len(), facts.len());
        assert_eq!(pool_for(&facts, Difficulty::Easy, false).len(), facts.len());

        let mut rng = StdRng::seed_from_u64(11);
        let qs = generate_questions(&facts, Difficulty::Easy, 20, true, &mut rng);
        assert_eq!(qs.len(), easy.len());
    }
}
