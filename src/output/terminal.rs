use itertools::Itertools;

use crate::output::sheet;
use crate::output::{Message, QuizOutput};
use crate::quiz::{Question, QuestionKinds};

pub const HELP: &str = "Comandos disponibles:
  abrir <archivo>            seleccionar un documento (.txt, .pdf, .docx)
  tipos                      ver los tipos de pregunta activos
  alternar <mcq|vf|corta>    activar o desactivar un tipo de pregunta
  generar                    generar el examen
  ver                        mostrar el examen
  elegir <n> <opción>        responder la pregunta n (letra o texto de la opción)
  responder <n> <texto>      responder una pregunta de respuesta corta
  verificar <n>              comprobar una respuesta
  calificar                  calificar el examen
  exportar [archivo.pdf]     exportar el examen a PDF
  ayuda                      mostrar esta ayuda
  salir                      terminar";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn describe_kinds(kinds: &QuestionKinds) -> String {
        let mark = |enabled: bool| if enabled { "x" } else { " " };
        format!(
            "[{}] Opción múltiple  [{}] Verdadero/Falso  [{}] Respuesta corta",
            mark(kinds.multiple_choice),
            mark(kinds.true_false),
            mark(kinds.short_answer)
        )
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerFeedback(index, question, correct) => {
                if *correct {
                    format!("{}. ✅ Correcto", index + 1)
                } else {
                    format!(
                        "{}. ❌ Incorrecto. Respuesta correcta: \"{}\"",
                        index + 1,
                        sheet::describe_answer(&question.get_correct_answer())
                    )
                }
            }
            AnswerRecorded(index) => format!("Respuesta guardada para la pregunta {}.", index + 1),
            CommandHelp => HELP.to_owned(),
            DocumentSelected(path) => format!("Documento seleccionado: {}", path.display()),
            Error(e) => format!("Error: {}", e),
            ExamReady(questions) => format!("📝 {}", sheet::get_exam_lines(questions).join("\n")),
            ExportUnavailable => "Función de exportar a PDF no disponible en esta versión.".into(),
            Exported(path) => format!("Examen exportado a {}", path.display()),
            GradeReport(questions, grade) => {
                let details = questions
                    .iter()
                    .zip(grade.results.iter())
                    .enumerate()
                    .map(|(index, (question, correct))| {
                        let mark = if *correct { "✅" } else { "❌" };
                        format!("{} {}. {}", mark, index + 1, Self::describe_solution(question))
                    })
                    .join("\n");
                format!(
                    "{}\nHas acertado {} de {} preguntas.",
                    details, grade.score, grade.total
                )
            }
            KindsChanged(kinds) => Self::describe_kinds(kinds),
            NoQuestions => "No se encontraron oraciones suficientes para generar preguntas.".into(),
            Processing => "Procesando texto...".into(),
            TextTooShort => "El archivo está vacío o muy corto.".into(),
            UnsupportedFormat(name) => format!(
                "Formato no soportado: {}. Solo se aceptan archivos .txt, .pdf y .docx",
                name
            ),
        }
    }

    fn describe_solution(question: &Question) -> String {
        format!(
            "Respuesta correcta: {}",
            sheet::describe_answer(&question.get_correct_answer())
        )
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}\n", self.interpret_message(message));
    }
}
