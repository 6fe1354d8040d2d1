//! Step-by-step help shown after the calendar file has been written.

use clap::ValueEnum;

/// Calendar application the user is importing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportTarget {
    /// Google Calendar (web)
    Google,
    /// Apple Calendar or Outlook (.ics)
    Apple,
}

pub fn import_instructions(target: ImportTarget, file_name: &str) -> Vec<String> {
    let mut lines = vec!["✅ Le fichier a été téléchargé !".to_string()];

    match target {
        ImportTarget::Google => {
            lines.push("Voici comment l'importer dans Google Calendar :".to_string());
            lines.push("1. Ouvrez Google Calendar".to_string());
            lines.push(
                "2. Cliquez sur la roue crantée en haut à droite → Paramètres".to_string(),
            );
            lines.push("3. Allez dans Importer et exporter".to_string());
            lines.push(format!("4. Sélectionnez le fichier téléchargé : {file_name}"));
            lines.push("5. Importez-le dans le calendrier de votre choix".to_string());
            lines.push("🎉 Tous les matchs sont maintenant dans votre agenda !".to_string());
        }
        ImportTarget::Apple => {
            lines.push("Si pas déjà importé :".to_string());
            lines.push("1. Ouvrez l'application Fichiers".to_string());
            lines.push("2. Rendez-vous dans le dossier Téléchargements".to_string());
            lines.push(format!("3. Appuyez sur le fichier {file_name}"));
            lines.push("4. Choisissez Ajouter à Calendrier si proposé".to_string());
            lines.push("📅 Tous les matchs sont maintenant ajoutés à votre calendrier !".to_string());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_name_the_file() {
        for target in [ImportTarget::Google, ImportTarget::Apple] {
            let lines = import_instructions(target, "liberty_matchs.ics");
            assert!(lines.iter().any(|l| l.contains("liberty_matchs.ics")));
        }
    }

    #[test]
    fn test_google_instructions() {
        let lines = import_instructions(ImportTarget::Google, "a.ics");
        assert!(lines[1].contains("Google Calendar"));
        assert_eq!(lines.len(), 8);
    }
}
