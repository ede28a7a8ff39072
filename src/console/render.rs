use crate::game::{Control, FeedbackTone, RenderCommand, Renderer};

/// Prints render commands to stdout
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::ShowDashboard => {
                println!("=== Choose a game: memory or quickcount ===")
            }
            RenderCommand::ShowGameArea => println!("==========================================="),
            RenderCommand::Prompt(text) => println!("\n{}", text),
            RenderCommand::Options(options) => {
                for (i, option) in options.iter().enumerate() {
                    println!("  [{}] {}", i + 1, option);
                }
            }
            RenderCommand::Sequence(items) => println!("    {}", items.join("   ")),
            RenderCommand::CountingImages { object, count, .. } => {
                let marker = object.chars().next().unwrap_or('*');
                let row: Vec<String> = (0..count).map(|_| format!("({})", marker)).collect();
                println!("    {}", row.join(" "));
            }
            RenderCommand::ClearStage | RenderCommand::ClearFeedback => {}
            RenderCommand::SetControl { control, visible } => {
                if visible {
                    match control {
                        Control::Start => println!("  > say \"start\" or type /start"),
                        Control::Next => println!("  > say \"next\" or type /next"),
                    }
                }
            }
            RenderCommand::StartLabel(_) => {}
            RenderCommand::Feedback { text, tone } => match tone {
                FeedbackTone::Correct => println!("  ✅ {}", text),
                FeedbackTone::Incorrect => println!("  ❌ {}", text),
            },
            RenderCommand::Score { score, level } => {
                println!("  Score: {}  Level: {}", score, level)
            }
            RenderCommand::ShowNotice(notice) => println!("!! {}", notice.message()),
            RenderCommand::DismissNotice => {}
            RenderCommand::VoiceIndicator(on) => {
                println!("  {}", if on { "🔊 Voice On" } else { "🔇 Voice Off" })
            }
        }
    }
}
