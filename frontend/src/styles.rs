pub const PAGE: &str = "min-h-screen w-full bg-gray-50 dark:bg-gray-950";
pub const CONTAINER: &str = "container mx-auto px-4 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700 backdrop-blur-sm";
pub const TITLE: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TITLE_GRADIENT: &str = "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const WHEEL_WRAPPER: &str = "wheel-wrapper relative mx-auto mb-8 w-full max-w-[500px] aspect-square";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";

pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";

pub const MODAL_OVERLAY: &str = "result-overlay fixed inset-0 z-[1100] bg-black/80 backdrop-blur-md flex items-center justify-center p-4";
pub const MODAL_CARD: &str = "result-card relative rounded-2xl bg-gray-900 text-center shadow-xl w-full max-w-md p-8 border border-gray-700";
pub const MODAL_BUTTON: &str = "mt-6 inline-flex w-full justify-center rounded-lg px-4 py-2 text-sm font-semibold text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50";

pub const LEGEND: &str = "mt-8 bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm";
pub const LEGEND_ROW: &str = "bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex items-center justify-between";

/// Keyframes for the pointer pulse, confetti and the flash ring.
pub const WHEEL_CSS: &str = r#"
@keyframes pulse-subtle {
    0% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4); }
    70% { transform: scale(1.02); box-shadow: 0 0 0 10px rgba(255, 215, 0, 0); }
    100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0); }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}

#confetti {
    position: absolute;
    inset: 0;
    overflow: visible;
    pointer-events: none;
}

.confetti-piece {
    position: absolute;
    top: -12px;
    width: 8px;
    height: 14px;
    border-radius: 2px;
    background: var(--c);
    opacity: 0;
    animation-name: confetti-fall;
    animation-timing-function: cubic-bezier(0.25, 0.6, 0.4, 1);
    animation-fill-mode: forwards;
}

@keyframes confetti-fall {
    0% { opacity: 1; transform: translateY(0) rotate(0deg); }
    100% { opacity: 0; transform: translateY(560px) rotate(720deg); }
}

.flash-ring {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    pointer-events: none;
    animation: flash-ring 1.1s ease-out forwards;
}

@keyframes flash-ring {
    0% { box-shadow: 0 0 0 0 rgba(255, 207, 51, 0.9); opacity: 1; }
    100% { box-shadow: 0 0 0 40px rgba(255, 207, 51, 0); opacity: 0; }
}

.result-card {
    animation: result-pop 0.25s ease-out;
}

@keyframes result-pop {
    0% { transform: scale(0.9); opacity: 0; }
    100% { transform: scale(1); opacity: 1; }
}
"#;
