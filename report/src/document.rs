//! The report text.
//!
//! Everything here is fixed copy describing a Moon-Earth-Sun n-body run;
//! the author field is the single point that varies between machines. The
//! referenced `moon-earth-sun` image is produced by the simulation itself
//! and is expected to sit next to the emitted file at LaTeX compile time.

use moonpaper_types::AuthorName;

const PLACEHOLDER: &str = "{author_name}";

/// The document with the author field unfilled.
///
/// `\date{\today}` is resolved by LaTeX, not here, so the emitted bytes are
/// identical from one run to the next.
const TEMPLATE: &str = r"\documentclass{article}
\usepackage{graphicx}
\begin{document}\title{Using N-Body Systems to Model the Solar System}\date{\today}
\author{{author_name}}
\maketitle

\section{Abstract}
In this experiment the path of the moon and earth were shown to move around each other as they orbited the sun.

\section{Introduction}
N-Body systems are use to model the gravitational effects bodies of mass have on each other. In a simulation the forces on a body, due to every other body in the system, are calculated for each body in the system. For each step of the simulation the speed and position of each body is updated. The forces on a body \emph{i} can be modeled by the following equation:
\begin{equation}
   \label{eq:nbodyforces}
    \vec{F}_i = \sum_{n} G \cdot \frac{m_i \cdot m_n}{\vec{d}_{n-i}}
\end{equation}

\section{Procedure}
A model was created in the C programming language, which followed the formula in equation \ref{eq:nbodyforces}, to calculate the forces acting on each body. Masses and velocity vectors of the Moon, Earth and Sun, from the NASA Space Science Data Coordinate Archive, were programmed into the model.

\newpage
\section{Results}
The result of the simulation were plotted and below is the result. Purple is the path of the Moon, teal is the path of the Earth.\\
\begin{figure}[h!]
  \centering
    \includegraphics[width=\textwidth]{moon-earth-sun}
    \caption{Paths of the Earth and Moon around the Sun}
    \label{fig:moonearthsun}
\end{figure}

\section{Conclusion}
Experimenting with N-Body systems shows that the moon does not rigorously orbit the Earth as the Earth orbits the Sun, rather the Moon and Earth interweave around each other as both orbit the sun. Instead of calling the Moon a satellite of the Earth it is more accurate to call the Moon and Earth a double-planet system.

\end{document}
";

/// Fills the author field and returns the complete LaTeX source.
///
/// The name is spliced in verbatim. LaTeX-significant characters in a real
/// name (`&`, `_`, `%`) would leak into the markup unescaped; see the
/// [`AuthorName`] docs.
#[must_use]
pub fn render(author: &AuthorName) -> String {
    TEMPLATE.replace(PLACEHOLDER, author.as_str())
}
